use matchup_data::{
    ConfigError,
    Effectiveness,
    MoveCategory,
    MoveSpec,
    combined_effectiveness,
};
use num::integer::Average;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    common::{
        Output,
        Range,
    },
    state::{
        BattleModifiers,
        CombatantStats,
    },
    stats::{
        apply_stage_multiplier,
        validate_level,
    },
};

/// Numerator of the lowest random damage roll, out of 100.
const MIN_ROLL: f64 = 85f64;

const CRITICAL_HIT_MULTIPLIER: f64 = 1.5;

/// The outcome of a single damage calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageResult {
    pub min_damage: u32,
    pub max_damage: u32,
    pub avg_damage: u32,
    pub percentage_of_defender_hp: f64,
    pub is_ohko: bool,
    pub is_two_hit_ko: bool,
    pub category: MoveCategory,
    /// Label for the type multiplier. `None` for status moves.
    pub effectiveness: Option<Effectiveness>,
    /// Combined type multiplier against the defender. `None` for status moves.
    pub type_multiplier: Option<f32>,
    pub defender_hp: u32,
    /// Every arithmetic step applied, in order.
    pub description: Vec<String>,
}

impl DamageResult {
    fn zero(
        category: MoveCategory,
        type_multiplier: Option<f32>,
        defender_hp: u32,
        description: Vec<String>,
    ) -> Self {
        Self {
            min_damage: 0,
            max_damage: 0,
            avg_damage: 0,
            percentage_of_defender_hp: 0f64,
            is_ohko: false,
            is_two_hit_ko: false,
            category,
            effectiveness: type_multiplier.map(Effectiveness::from),
            type_multiplier,
            defender_hp,
            description,
        }
    }

    fn status(defender_hp: u32) -> Self {
        let (_, description) = Output::<u32>::start(0u32, "status move").into_parts();
        Self::zero(MoveCategory::Status, None, defender_hp, description)
    }

    /// The damage range, from the lowest to the highest roll.
    pub fn range(&self) -> Range<u32> {
        Range::new(self.min_damage, self.max_damage)
    }

    /// Number of average-damage hits needed to knock out the defender from full HP.
    ///
    /// `None` if the move deals no damage.
    pub fn hits_to_ko(&self) -> Option<u32> {
        if self.avg_damage == 0 {
            None
        } else {
            Some(self.defender_hp.div_ceil(self.avg_damage))
        }
    }
}

/// Resolves the damage a move deals from one combatant to another.
///
/// Status moves (no power or the status category) resolve to zero damage before anything else is
/// looked at. Otherwise, damage is computed in this order:
///
/// 1. Stages are applied to the attacking and defending stats.
/// 1. Base damage is computed with integer floor division.
/// 1. STAB, type effectiveness, weather, item, ability, and critical hit multiply the damage.
/// 1. The random spread produces the minimum, maximum, and average rolls.
///
/// An immune defender always takes zero damage, regardless of other multipliers.
pub fn resolve(
    attacker: &CombatantStats,
    defender: &CombatantStats,
    mov: &MoveSpec,
    modifiers: &BattleModifiers,
) -> Result<DamageResult, ConfigError> {
    if mov.is_status() {
        return Ok(DamageResult::status(defender.hp()));
    }
    let Some((offense, defense)) = mov.category.stats() else {
        return Ok(DamageResult::status(defender.hp()));
    };

    let defender_hp = defender.hp();
    if defender_hp == 0 {
        return Err(ConfigError::NonPositiveHp);
    }
    validate_level(attacker.level)?;
    modifiers.validate()?;

    let attack = apply_stage_multiplier(
        attacker.stats.get(offense),
        modifiers.stage(offense).value(),
    )?;
    let defense_value = apply_stage_multiplier(
        defender.stats.get(defense),
        modifiers.stage(defense).value(),
    )?;
    if defense_value == 0 {
        return Err(ConfigError::NonPositiveStat { stat: defense });
    }

    let level_component = 2 * attacker.level as u64 / 5 + 2;

    let mut base_damage = Output::<u64>::start(attack as u64, offense);
    base_damage.mul(level_component, "attacker level");
    base_damage.mul(mov.power as u64, "base power");
    base_damage.div(defense_value as u64, defense);
    base_damage.div(50u64, "constant");
    base_damage.add(2u64, "constant");

    let mut damage = base_damage.map(|damage| damage as f64, "modifiers");

    if attacker.types.contains(mov.typ) {
        damage.mul(modifiers.stab_multiplier, "stab");
    }

    let type_multiplier = combined_effectiveness(mov.typ, &defender.types);
    if type_multiplier == 0f32 {
        damage.set(0f64, format!("{} immune to {}", defender.types, mov.typ));
        let (_, description) = damage.into_parts();
        return Ok(DamageResult::zero(
            mov.category,
            Some(type_multiplier),
            defender_hp,
            description,
        ));
    }
    if type_multiplier != 1f32 {
        damage.mul(
            type_multiplier as f64,
            Effectiveness::from(type_multiplier),
        );
    }

    for (name, multiplier) in [
        ("weather", modifiers.weather_multiplier),
        ("item", modifiers.item_multiplier),
        ("ability", modifiers.ability_multiplier),
    ] {
        if multiplier != 1f64 {
            damage.mul(multiplier, name);
        }
    }

    if modifiers.critical {
        damage.mul(CRITICAL_HIT_MULTIPLIER, "crit");
    }

    if *damage.value() > u32::MAX as f64 {
        return Err(ConfigError::DamageOverflow {
            value: *damage.value(),
        });
    }

    let rolls = damage.map(
        |damage| {
            let max = damage.floor() as u32;
            let min = (damage * MIN_ROLL / 100f64).floor() as u32;
            Range::new(min, max)
        },
        "random spread",
    );
    let (rolls, description) = rolls.into_parts();

    let avg_damage = rolls.a().average_floor(&rolls.b());
    Ok(DamageResult {
        min_damage: rolls.a(),
        max_damage: rolls.b(),
        avg_damage,
        percentage_of_defender_hp: avg_damage as f64 / defender_hp as f64 * 100f64,
        is_ohko: avg_damage >= defender_hp,
        is_two_hit_ko: avg_damage as u64 * 2 >= defender_hp as u64,
        category: mov.category,
        effectiveness: Some(Effectiveness::from(type_multiplier)),
        type_multiplier: Some(type_multiplier),
        defender_hp,
        description,
    })
}
