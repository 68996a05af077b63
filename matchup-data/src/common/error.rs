use thiserror::Error;

use crate::{
    Stat,
    Type,
};

/// A value passed in by the caller that violates a documented precondition.
///
/// Every variant is a deterministic programming error on the caller's side. Nothing is ever
/// clamped into range; the offending value is reported back instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("iv {value} for {stat} out of range [0, 31]")]
    IvOutOfRange { stat: Stat, value: u16 },
    #[error("ev {value} for {stat} out of range [0, 252]")]
    EvOutOfRange { stat: Stat, value: u16 },
    #[error("ev total {total} exceeds 510")]
    EvTotalExceeded { total: u32 },
    #[error("level {level} out of range [1, 100]")]
    LevelOutOfRange { level: u8 },
    #[error("stage {stage} out of range [-6, 6]")]
    StageOutOfRange { stage: i8 },
    #[error("defender hp must be positive")]
    NonPositiveHp,
    #[error("{stat} must be positive")]
    NonPositiveStat { stat: Stat },
    #[error("{name} multiplier {value} must be finite and non-negative")]
    InvalidMultiplier { name: &'static str, value: f64 },
    #[error("staged stat {value} does not fit in 32 bits")]
    StatOverflow { value: u64 },
    #[error("damage {value} does not fit in 32 bits")]
    DamageOverflow { value: f64 },
    #[error("type set cannot contain {typ} twice")]
    DuplicateType { typ: Type },
    #[error("type set must contain 1 or 2 types, got {count}")]
    InvalidTypeCount { count: usize },
    #[error("roster is empty")]
    EmptyRoster,
    #[error("roster has {size} members, at most 6 allowed")]
    RosterTooLarge { size: usize },
}
