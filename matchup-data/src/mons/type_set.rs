use std::{
    fmt,
    fmt::Display,
    iter,
};

use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    ConfigError,
    Type,
};

/// The typing of a species or combatant: one type, or two distinct types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Type>", into = "Vec<Type>")]
pub struct TypeSet {
    primary: Type,
    secondary: Option<Type>,
}

impl TypeSet {
    /// A single-type typing.
    pub fn single(typ: Type) -> Self {
        Self {
            primary: typ,
            secondary: None,
        }
    }

    /// A dual-type typing.
    ///
    /// Fails if both types are the same.
    pub fn dual(primary: Type, secondary: Type) -> Result<Self, ConfigError> {
        if primary == secondary {
            return Err(ConfigError::DuplicateType { typ: primary });
        }
        Ok(Self {
            primary,
            secondary: Some(secondary),
        })
    }

    /// The first type.
    pub fn primary(&self) -> Type {
        self.primary
    }

    /// The second type, if any.
    pub fn secondary(&self) -> Option<Type> {
        self.secondary
    }

    /// Number of types, either 1 or 2.
    pub fn len(&self) -> usize {
        if self.secondary.is_some() { 2 } else { 1 }
    }

    /// Checks if the typing includes the given type.
    pub fn contains(&self, typ: Type) -> bool {
        self.primary == typ || self.secondary == Some(typ)
    }

    /// Iterates over the types, primary first.
    pub fn iter(&self) -> impl Iterator<Item = Type> {
        self.into_iter()
    }
}

impl From<Type> for TypeSet {
    fn from(value: Type) -> Self {
        Self::single(value)
    }
}

impl TryFrom<Vec<Type>> for TypeSet {
    type Error = ConfigError;
    fn try_from(value: Vec<Type>) -> Result<Self, Self::Error> {
        match value.as_slice() {
            [typ] => Ok(Self::single(*typ)),
            [primary, secondary] => Self::dual(*primary, *secondary),
            _ => Err(ConfigError::InvalidTypeCount { count: value.len() }),
        }
    }
}

impl From<TypeSet> for Vec<Type> {
    fn from(value: TypeSet) -> Self {
        value.iter().collect()
    }
}

impl IntoIterator for &TypeSet {
    type Item = Type;
    type IntoIter = iter::Chain<iter::Once<Type>, std::option::IntoIter<Type>>;
    fn into_iter(self) -> Self::IntoIter {
        iter::once(self.primary).chain(self.secondary)
    }
}

impl Display for TypeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.secondary {
            Some(secondary) => write!(f, "{}/{secondary}", self.primary),
            None => write!(f, "{}", self.primary),
        }
    }
}
