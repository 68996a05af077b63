use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::Stat;

/// The nature of a combatant, which raises one stat by 10% and lowers another by 10%.
///
/// Neutral natures raise and lower nothing.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Nature {
    #[string = "Hardy"]
    #[default]
    Hardy,
    #[string = "Lonely"]
    Lonely,
    #[string = "Brave"]
    Brave,
    #[string = "Adamant"]
    Adamant,
    #[string = "Naughty"]
    Naughty,
    #[string = "Bold"]
    Bold,
    #[string = "Docile"]
    Docile,
    #[string = "Relaxed"]
    Relaxed,
    #[string = "Impish"]
    Impish,
    #[string = "Lax"]
    Lax,
    #[string = "Timid"]
    Timid,
    #[string = "Hasty"]
    Hasty,
    #[string = "Serious"]
    Serious,
    #[string = "Jolly"]
    Jolly,
    #[string = "Naive"]
    Naive,
    #[string = "Modest"]
    Modest,
    #[string = "Mild"]
    Mild,
    #[string = "Quiet"]
    Quiet,
    #[string = "Bashful"]
    Bashful,
    #[string = "Rash"]
    Rash,
    #[string = "Calm"]
    Calm,
    #[string = "Gentle"]
    Gentle,
    #[string = "Sassy"]
    Sassy,
    #[string = "Careful"]
    Careful,
    #[string = "Quirky"]
    Quirky,
}

impl Nature {
    /// All natures.
    pub const ALL: [Nature; 25] = [
        Nature::Hardy,
        Nature::Lonely,
        Nature::Brave,
        Nature::Adamant,
        Nature::Naughty,
        Nature::Bold,
        Nature::Docile,
        Nature::Relaxed,
        Nature::Impish,
        Nature::Lax,
        Nature::Timid,
        Nature::Hasty,
        Nature::Serious,
        Nature::Jolly,
        Nature::Naive,
        Nature::Modest,
        Nature::Mild,
        Nature::Quiet,
        Nature::Bashful,
        Nature::Rash,
        Nature::Calm,
        Nature::Gentle,
        Nature::Sassy,
        Nature::Careful,
        Nature::Quirky,
    ];

    /// The stat raised and the stat lowered by this nature, in that order.
    pub fn effect(&self) -> (Option<Stat>, Option<Stat>) {
        let (increases, decreases) = match self {
            Self::Hardy | Self::Docile | Self::Serious | Self::Bashful | Self::Quirky => {
                return (None, None);
            }
            Self::Lonely => (Stat::Atk, Stat::Def),
            Self::Brave => (Stat::Atk, Stat::Spe),
            Self::Adamant => (Stat::Atk, Stat::SpAtk),
            Self::Naughty => (Stat::Atk, Stat::SpDef),
            Self::Bold => (Stat::Def, Stat::Atk),
            Self::Relaxed => (Stat::Def, Stat::Spe),
            Self::Impish => (Stat::Def, Stat::SpAtk),
            Self::Lax => (Stat::Def, Stat::SpDef),
            Self::Timid => (Stat::Spe, Stat::Atk),
            Self::Hasty => (Stat::Spe, Stat::Def),
            Self::Jolly => (Stat::Spe, Stat::SpAtk),
            Self::Naive => (Stat::Spe, Stat::SpDef),
            Self::Modest => (Stat::SpAtk, Stat::Atk),
            Self::Mild => (Stat::SpAtk, Stat::Def),
            Self::Quiet => (Stat::SpAtk, Stat::Spe),
            Self::Rash => (Stat::SpAtk, Stat::SpDef),
            Self::Calm => (Stat::SpDef, Stat::Atk),
            Self::Gentle => (Stat::SpDef, Stat::Def),
            Self::Sassy => (Stat::SpDef, Stat::Spe),
            Self::Careful => (Stat::SpDef, Stat::SpAtk),
        };
        (Some(increases), Some(decreases))
    }

    /// The stat raised by this nature.
    pub fn increases(&self) -> Option<Stat> {
        self.effect().0
    }

    /// The stat lowered by this nature.
    pub fn decreases(&self) -> Option<Stat> {
        self.effect().1
    }

    /// Checks if the nature has no effect on any stat.
    pub fn is_neutral(&self) -> bool {
        self.increases().is_none()
    }

    /// Applies the nature to a stat value, flooring the result.
    ///
    /// Equivalent to `floor(value * 1.1)` or `floor(value * 0.9)`, but computed exactly in
    /// integers.
    pub fn modify(&self, stat: Stat, value: u32) -> u32 {
        let (increases, decreases) = self.effect();
        if increases == Some(stat) {
            value * 11 / 10
        } else if decreases == Some(stat) {
            value * 9 / 10
        } else {
            value
        }
    }
}

#[cfg(test)]
mod nature_test {
    use crate::{
        Nature,
        Stat,
        test_util::{
            test_string_deserialization,
            test_string_serialization,
        },
    };

    #[test]
    fn serializes_to_string() {
        test_string_serialization(Nature::Adamant, "Adamant");
        test_string_serialization(Nature::Quirky, "Quirky");
    }

    #[test]
    fn deserializes_lowercase() {
        test_string_deserialization("modest", Nature::Modest);
        test_string_deserialization("jolly", Nature::Jolly);
    }

    #[test]
    fn increases_and_decreases_different_stats() {
        let mut neutral = 0;
        for nature in Nature::ALL {
            match nature.effect() {
                (None, None) => neutral += 1,
                (Some(increases), Some(decreases)) => {
                    assert_ne!(increases, decreases, "{nature}");
                    assert_ne!(increases, Stat::HP, "{nature}");
                    assert_ne!(decreases, Stat::HP, "{nature}");
                }
                effect => panic!("{nature} has one-sided effect {effect:?}"),
            }
        }
        assert_eq!(neutral, 5);
    }

    #[test]
    fn every_non_neutral_pairing_appears_once() {
        let mut pairs = Nature::ALL
            .iter()
            .filter_map(|nature| match nature.effect() {
                (Some(increases), Some(decreases)) => Some((increases, decreases)),
                _ => None,
            })
            .collect::<Vec<_>>();
        pairs.sort();
        pairs.dedup();
        assert_eq!(pairs.len(), 20);
    }

    #[test]
    fn modifies_exactly() {
        assert_eq!(Nature::Adamant.modify(Stat::Atk, 299), 328);
        assert_eq!(Nature::Adamant.modify(Stat::SpAtk, 299), 269);
        assert_eq!(Nature::Adamant.modify(Stat::Def, 299), 299);
        assert_eq!(Nature::Modest.modify(Stat::Atk, 25), 22);
        assert_eq!(Nature::Hardy.modify(Stat::Atk, 299), 299);
    }
}
