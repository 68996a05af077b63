use std::fmt;

use serde::{
    Deserialize,
    Serialize,
    de::{
        Unexpected,
        Visitor,
    },
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The type of a species or move, which determines its weaknesses and resistances.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Type {
    #[string = "Normal"]
    #[default]
    Normal,
    #[string = "Fighting"]
    Fighting,
    #[string = "Flying"]
    Flying,
    #[string = "Poison"]
    Poison,
    #[string = "Ground"]
    Ground,
    #[string = "Rock"]
    Rock,
    #[string = "Bug"]
    Bug,
    #[string = "Ghost"]
    Ghost,
    #[string = "Steel"]
    Steel,
    #[string = "Fire"]
    Fire,
    #[string = "Water"]
    Water,
    #[string = "Grass"]
    Grass,
    #[string = "Electric"]
    Electric,
    #[string = "Psychic"]
    Psychic,
    #[string = "Ice"]
    Ice,
    #[string = "Dragon"]
    Dragon,
    #[string = "Dark"]
    Dark,
    #[string = "Fairy"]
    Fairy,
}

impl Type {
    /// Number of types on the chart.
    pub const COUNT: usize = 18;

    /// All types, in chart order.
    pub const ALL: [Type; Type::COUNT] = [
        Type::Normal,
        Type::Fighting,
        Type::Flying,
        Type::Poison,
        Type::Ground,
        Type::Rock,
        Type::Bug,
        Type::Ghost,
        Type::Steel,
        Type::Fire,
        Type::Water,
        Type::Grass,
        Type::Electric,
        Type::Psychic,
        Type::Ice,
        Type::Dragon,
        Type::Dark,
        Type::Fairy,
    ];

    /// Position of the type on the chart.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Type effectiveness of one type against another.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TypeEffectiveness {
    /// No effect.
    None,
    /// Not very effective.
    Weak,
    /// Normal effectiveness.
    #[default]
    Normal,
    /// Super effective.
    Strong,
}

impl TryFrom<f32> for TypeEffectiveness {
    type Error = f32;

    /// Only the four exact chart values convert.
    fn try_from(value: f32) -> Result<Self, Self::Error> {
        match value {
            0.0 => Ok(Self::None),
            0.5 => Ok(Self::Weak),
            1.0 => Ok(Self::Normal),
            2.0 => Ok(Self::Strong),
            _ => Err(value),
        }
    }
}

impl From<TypeEffectiveness> for f32 {
    fn from(value: TypeEffectiveness) -> Self {
        match value {
            TypeEffectiveness::None => 0f32,
            TypeEffectiveness::Weak => 0.5,
            TypeEffectiveness::Normal => 1f32,
            TypeEffectiveness::Strong => 2f32,
        }
    }
}

impl Serialize for TypeEffectiveness {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match &self {
            Self::Weak => serializer.serialize_f32(f32::from(*self)),
            _ => serializer.serialize_u32(f32::from(*self) as u32),
        }
    }
}

struct TypeEffectivenessVisitor;

impl<'de> Visitor<'de> for TypeEffectivenessVisitor {
    type Value = TypeEffectiveness;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("one of the following values: 0, 0.5, 1, 2")
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Self::Value::try_from(v as f32).map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Self::Value::try_from(v as f32)
            .map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
    }

    fn visit_f32<E>(self, v: f32) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Self::Value::try_from(v).map_err(|_| E::invalid_value(Unexpected::Float(v as f64), &self))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        if (v as f32) as f64 != v {
            return Err(E::invalid_value(Unexpected::Float(v), &self));
        }
        Self::Value::try_from(v as f32).map_err(|_| E::invalid_value(Unexpected::Float(v), &self))
    }
}

impl<'de> Deserialize<'de> for TypeEffectiveness {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_f32(TypeEffectivenessVisitor)
    }
}

/// Effectiveness of an attacking type against a full defensive typing.
///
/// Unlike [`TypeEffectiveness`], which describes a single chart entry, this covers every
/// product two chart entries can produce.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Effectiveness {
    /// 0x.
    #[string = "Immune"]
    Immune,
    /// 0.25x.
    #[string = "Double Resisted"]
    DoubleResisted,
    /// 0.5x.
    #[string = "Resisted"]
    Resisted,
    /// 1x.
    #[string = "Neutral"]
    #[default]
    Neutral,
    /// 2x.
    #[string = "Super Effective"]
    SuperEffective,
    /// 4x.
    #[string = "Double Super Effective"]
    DoubleSuperEffective,
}

impl Effectiveness {
    /// The multiplier this label stands for.
    pub fn multiplier(&self) -> f32 {
        match self {
            Self::Immune => 0f32,
            Self::DoubleResisted => 0.25,
            Self::Resisted => 0.5,
            Self::Neutral => 1f32,
            Self::SuperEffective => 2f32,
            Self::DoubleSuperEffective => 4f32,
        }
    }

    /// Checks if the attack deals more than neutral damage.
    pub fn is_weakness(&self) -> bool {
        *self > Self::Neutral
    }

    /// Checks if the attack deals less than neutral damage, but still deals damage.
    pub fn is_resistance(&self) -> bool {
        matches!(self, Self::DoubleResisted | Self::Resisted)
    }
}

impl From<f32> for Effectiveness {
    fn from(value: f32) -> Self {
        if value < 0f32 || value.abs() < f32::EPSILON {
            Self::Immune
        } else if value < 0.25 || (value - 0.25).abs() < f32::EPSILON {
            Self::DoubleResisted
        } else if value < 0.5 || (value - 0.5).abs() < f32::EPSILON {
            Self::Resisted
        } else if value < 1f32 || (value - 1f32).abs() < f32::EPSILON {
            Self::Neutral
        } else if value < 2f32 || (value - 2f32).abs() < f32::EPSILON {
            Self::SuperEffective
        } else {
            Self::DoubleSuperEffective
        }
    }
}

impl From<TypeEffectiveness> for Effectiveness {
    fn from(value: TypeEffectiveness) -> Self {
        Self::from(f32::from(value))
    }
}

#[cfg(test)]
mod type_test {
    use crate::{
        Type,
        test_util::{
            test_string_deserialization,
            test_string_serialization,
        },
    };

    #[test]
    fn serializes_to_string() {
        test_string_serialization(Type::Grass, "Grass");
        test_string_serialization(Type::Fire, "Fire");
        test_string_serialization(Type::Water, "Water");
    }

    #[test]
    fn deserializes_lowercase() {
        test_string_deserialization("normal", Type::Normal);
        test_string_deserialization("dragon", Type::Dragon);
        test_string_deserialization("ghost", Type::Ghost);
    }

    #[test]
    fn indexes_match_chart_order() {
        for (i, typ) in Type::ALL.iter().enumerate() {
            assert_eq!(typ.index(), i);
        }
    }
}
