use matchup_data::{
    ConfigError,
    Nature,
    Stage,
    Stat,
    StatTable,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::common::Range;

/// Highest IV for any stat.
pub const MAX_IV: u8 = 31;
/// Highest EV for any single stat.
pub const MAX_EV: u16 = 252;
/// Highest EV total across all stats.
pub const MAX_EV_TOTAL: u32 = 510;
/// Lowest valid level.
pub const MIN_LEVEL: u8 = 1;
/// Highest valid level.
pub const MAX_LEVEL: u8 = 100;

/// A value for each of the six stats.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats<T> {
    pub hp: T,
    pub atk: T,
    pub def: T,
    pub spa: T,
    pub spd: T,
    pub spe: T,
}

impl<T> Stats<T>
where
    T: Copy,
{
    /// Returns the value for the given stat.
    pub fn get(&self, stat: Stat) -> T {
        match stat {
            Stat::HP => self.hp,
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::SpAtk => self.spa,
            Stat::SpDef => self.spd,
            Stat::Spe => self.spe,
        }
    }

    /// Sets the given stat value.
    pub fn set(&mut self, stat: Stat, value: T) {
        let stat = match stat {
            Stat::HP => &mut self.hp,
            Stat::Atk => &mut self.atk,
            Stat::Def => &mut self.def,
            Stat::SpAtk => &mut self.spa,
            Stat::SpDef => &mut self.spd,
            Stat::Spe => &mut self.spe,
        };
        *stat = value;
    }

    /// Iterates over all values, in HP to Spe order.
    pub fn entries(&self) -> impl Iterator<Item = (Stat, T)> + '_ {
        Stat::ALL.into_iter().map(|stat| (stat, self.get(stat)))
    }
}

/// A validated set of IVs, each in [0, 31].
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StatTable", into = "StatTable")]
pub struct IvSet(StatTable);

impl IvSet {
    pub fn new(table: StatTable) -> Result<Self, ConfigError> {
        for (stat, value) in &table {
            if value > MAX_IV as u16 {
                return Err(ConfigError::IvOutOfRange { stat, value });
            }
        }
        Ok(Self(table))
    }

    /// Every IV at 31.
    pub fn max() -> Self {
        Self(StatTable::splat(MAX_IV as u16))
    }

    pub fn get(&self, stat: Stat) -> u8 {
        // Bounded by 31 at construction.
        self.0.get(stat) as u8
    }
}

impl TryFrom<StatTable> for IvSet {
    type Error = ConfigError;
    fn try_from(value: StatTable) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<IvSet> for StatTable {
    fn from(value: IvSet) -> Self {
        value.0
    }
}

/// A validated set of EVs, each in [0, 252] and summing to at most 510.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StatTable", into = "StatTable")]
pub struct EvSet(StatTable);

impl EvSet {
    pub fn new(table: StatTable) -> Result<Self, ConfigError> {
        for (stat, value) in &table {
            if value > MAX_EV {
                return Err(ConfigError::EvOutOfRange { stat, value });
            }
        }
        let total = table.sum();
        if total > MAX_EV_TOTAL {
            return Err(ConfigError::EvTotalExceeded { total });
        }
        Ok(Self(table))
    }

    pub fn get(&self, stat: Stat) -> u16 {
        self.0.get(stat)
    }

    pub fn total(&self) -> u32 {
        self.0.sum()
    }
}

impl TryFrom<StatTable> for EvSet {
    type Error = ConfigError;
    fn try_from(value: StatTable) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EvSet> for StatTable {
    fn from(value: EvSet) -> Self {
        value.0
    }
}

pub(crate) fn validate_level(level: u8) -> Result<(), ConfigError> {
    if !(MIN_LEVEL..=MAX_LEVEL).contains(&level) {
        return Err(ConfigError::LevelOutOfRange { level });
    }
    Ok(())
}

/// Computes a single stat.
///
/// HP is `floor((2*base + iv + floor(ev/4)) * level / 100) + level + 10` and ignores nature.
/// Every other stat is `floor((2*base + iv + floor(ev/4)) * level / 100) + 5`, then scaled by the
/// nature.
///
/// The EV total is not checked here. Use [`EvSet`] for that.
pub fn compute_stat(
    base: u16,
    iv: u8,
    ev: u16,
    level: u8,
    stat: Stat,
    nature: Nature,
) -> Result<u32, ConfigError> {
    if iv > MAX_IV {
        return Err(ConfigError::IvOutOfRange {
            stat,
            value: iv as u16,
        });
    }
    if ev > MAX_EV {
        return Err(ConfigError::EvOutOfRange { stat, value: ev });
    }
    validate_level(level)?;

    let level = level as u32;
    let value = (2 * base as u32 + iv as u32 + ev as u32 / 4) * level / 100;
    if stat == Stat::HP {
        Ok(value + level + 10)
    } else {
        Ok(nature.modify(stat, value + 5))
    }
}

/// The nature that lowers the given stat, or a neutral nature for HP.
fn hindering_nature(stat: Stat) -> Nature {
    Nature::ALL
        .into_iter()
        .find(|nature| nature.decreases() == Some(stat))
        .unwrap_or_default()
}

/// The nature that raises the given stat, or a neutral nature for HP.
fn beneficial_nature(stat: Stat) -> Nature {
    Nature::ALL
        .into_iter()
        .find(|nature| nature.increases() == Some(stat))
        .unwrap_or_default()
}

/// Computes the lowest and highest possible value of a stat at a level.
///
/// The low end has no IVs, no EVs, and a hindering nature. The high end has 31 IVs, 252 EVs, and
/// a beneficial nature.
pub fn compute_stat_range(base: u16, level: u8, stat: Stat) -> Result<Range<u32>, ConfigError> {
    let min = compute_stat(base, 0, 0, level, stat, hindering_nature(stat))?;
    let max = compute_stat(base, MAX_IV, MAX_EV, level, stat, beneficial_nature(stat))?;
    Ok(Range::new(min, max))
}

/// Computes every stat from base stats.
pub fn compute_stats(
    base_stats: &StatTable,
    ivs: &IvSet,
    evs: &EvSet,
    level: u8,
    nature: Nature,
) -> Result<Stats<u32>, ConfigError> {
    let mut stats = Stats::default();
    for (stat, base) in base_stats {
        stats.set(
            stat,
            compute_stat(base, ivs.get(stat), evs.get(stat), level, stat, nature)?,
        );
    }
    Ok(stats)
}

/// Computes the possible range of every stat from base stats.
pub fn compute_stat_ranges(
    base_stats: &StatTable,
    level: u8,
) -> Result<Stats<Range<u32>>, ConfigError> {
    let mut stats = Stats::default();
    for (stat, base) in base_stats {
        stats.set(stat, compute_stat_range(base, level, stat)?);
    }
    Ok(stats)
}

/// Scales a computed stat by a stage.
///
/// Non-negative stages multiply by `(2 + stage) / 2`. Negative stages multiply by
/// `2 / (2 - stage)`. The result is floored. A result too large for `u32` is an error.
pub fn apply_stage_multiplier(value: u32, stage: i8) -> Result<u32, ConfigError> {
    let (numerator, denominator) = Stage::new(stage)?.fraction();
    let scaled = value as u64 * numerator as u64 / denominator as u64;
    u32::try_from(scaled).map_err(|_| ConfigError::StatOverflow { value: scaled })
}
