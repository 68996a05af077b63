use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::Stat;

/// The category of a move.
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
pub enum MoveCategory {
    #[string = "Physical"]
    #[default]
    Physical,
    #[string = "Special"]
    Special,
    #[string = "Status"]
    Status,
}

impl MoveCategory {
    /// The offensive and defensive stats used by the category, if it deals damage.
    pub fn stats(&self) -> Option<(Stat, Stat)> {
        match self {
            Self::Physical => Some((Stat::Atk, Stat::Def)),
            Self::Special => Some((Stat::SpAtk, Stat::SpDef)),
            Self::Status => None,
        }
    }
}
