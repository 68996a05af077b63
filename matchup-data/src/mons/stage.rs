use std::{
    fmt,
    fmt::Display,
};

use serde::{
    Deserialize,
    Serialize,
};

use crate::ConfigError;

/// A stat stage (boost or drop) in [-6, +6].
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "i8", into = "i8")]
pub struct Stage(i8);

impl Stage {
    pub const MIN: i8 = -6;
    pub const MAX: i8 = 6;

    /// Creates a new stage, failing if it is out of range.
    pub fn new(stage: i8) -> Result<Self, ConfigError> {
        if !(Self::MIN..=Self::MAX).contains(&stage) {
            return Err(ConfigError::StageOutOfRange { stage });
        }
        Ok(Self(stage))
    }

    /// The raw stage value.
    pub fn value(&self) -> i8 {
        self.0
    }

    /// The stage multiplier as an integer fraction `(numerator, denominator)`.
    ///
    /// `(2 + stage) / 2` for non-negative stages and `2 / (2 - stage)` for negative stages.
    pub fn fraction(&self) -> (u32, u32) {
        let stage = self.0 as i32;
        if stage >= 0 {
            ((2 + stage) as u32, 2)
        } else {
            (2, (2 - stage) as u32)
        }
    }
}

impl TryFrom<i8> for Stage {
    type Error = ConfigError;
    fn try_from(value: i8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Stage> for i8 {
    fn from(value: Stage) -> Self {
        value.0
    }
}

impl Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}", self.0)
    }
}
