use matchup_data::{
    ConfigError,
    Nature,
    Stage,
    Stat,
    StatTable,
    TypeSet,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::stats::{
    EvSet,
    IvSet,
    MAX_LEVEL,
    Stats,
    compute_stats,
};

fn default_level() -> u8 {
    MAX_LEVEL
}

/// A combatant on one side of a damage calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatantStats {
    #[serde(default = "default_level")]
    pub level: u8,
    pub types: TypeSet,
    /// Computed stats, before stages.
    pub stats: Stats<u32>,
}

impl CombatantStats {
    /// Creates a level 100 combatant.
    pub fn new(types: TypeSet, stats: Stats<u32>) -> Self {
        Self {
            level: default_level(),
            types,
            stats,
        }
    }

    /// Creates a combatant by computing its stats from base stats.
    pub fn from_base_stats(
        types: TypeSet,
        base_stats: &StatTable,
        ivs: &IvSet,
        evs: &EvSet,
        level: u8,
        nature: Nature,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            level,
            types,
            stats: compute_stats(base_stats, ivs, evs, level, nature)?,
        })
    }

    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    pub fn hp(&self) -> u32 {
        self.stats.hp
    }
}

/// Situational modifiers for a single damage calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleModifiers {
    pub attack_stage: Stage,
    pub defense_stage: Stage,
    pub sp_attack_stage: Stage,
    pub sp_defense_stage: Stage,
    pub speed_stage: Stage,
    pub critical: bool,
    pub weather_multiplier: f64,
    pub item_multiplier: f64,
    pub ability_multiplier: f64,
    /// Applied when the move shares a type with the attacker. 2.0 models Adaptability.
    pub stab_multiplier: f64,
}

impl Default for BattleModifiers {
    fn default() -> Self {
        Self {
            attack_stage: Stage::default(),
            defense_stage: Stage::default(),
            sp_attack_stage: Stage::default(),
            sp_defense_stage: Stage::default(),
            speed_stage: Stage::default(),
            critical: false,
            weather_multiplier: 1f64,
            item_multiplier: 1f64,
            ability_multiplier: 1f64,
            stab_multiplier: 1.5,
        }
    }
}

impl BattleModifiers {
    /// The stage applied to the given stat. HP has no stage.
    pub fn stage(&self, stat: Stat) -> Stage {
        match stat {
            Stat::HP => Stage::default(),
            Stat::Atk => self.attack_stage,
            Stat::Def => self.defense_stage,
            Stat::SpAtk => self.sp_attack_stage,
            Stat::SpDef => self.sp_defense_stage,
            Stat::Spe => self.speed_stage,
        }
    }

    /// All configurable multipliers, with their names, in application order.
    pub fn multipliers(&self) -> [(&'static str, f64); 4] {
        [
            ("stab", self.stab_multiplier),
            ("weather", self.weather_multiplier),
            ("item", self.item_multiplier),
            ("ability", self.ability_multiplier),
        ]
    }

    /// Checks that every multiplier is finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in self.multipliers() {
            if !value.is_finite() || value < 0f64 {
                return Err(ConfigError::InvalidMultiplier { name, value });
            }
        }
        Ok(())
    }
}
