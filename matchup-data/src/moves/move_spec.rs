use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    MoveCategory,
    Type,
};

/// Data about a particular move, as supplied by the caller.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSpec {
    /// Name of the move.
    pub name: String,
    /// Move type.
    #[serde(rename = "type")]
    pub typ: Type,
    /// Base power. Zero for status moves.
    #[serde(default)]
    pub power: u16,
    /// Move category.
    pub category: MoveCategory,
    /// Accuracy, in percent.
    ///
    /// `None` means the move never misses. Carried through for display; damage does not depend
    /// on it.
    #[serde(default)]
    pub accuracy: Option<u8>,
}

impl MoveSpec {
    /// Checks if the move deals no direct damage.
    pub fn is_status(&self) -> bool {
        self.power == 0 || self.category == MoveCategory::Status
    }
}
