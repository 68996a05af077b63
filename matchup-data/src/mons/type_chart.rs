use std::sync::LazyLock;

use serde::{
    Serialize,
    Serializer,
    ser::SerializeMap,
};

use crate::{
    Type,
    TypeEffectiveness,
    TypeSet,
};

/// The outgoing side of the type chart for a single attacking type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeRelations {
    /// Types this type hits for 2x.
    pub super_effective: &'static [Type],
    /// Types this type hits for 0.5x.
    pub not_very_effective: &'static [Type],
    /// Types this type cannot hit.
    pub no_effect: &'static [Type],
}

impl TypeRelations {
    const fn new(
        super_effective: &'static [Type],
        not_very_effective: &'static [Type],
        no_effect: &'static [Type],
    ) -> Self {
        Self {
            super_effective,
            not_very_effective,
            no_effect,
        }
    }
}

impl Type {
    /// The outgoing relations of this type as an attacker.
    pub fn relations(self) -> TypeRelations {
        use Type::*;
        match self {
            Normal => TypeRelations::new(&[], &[Rock, Steel], &[Ghost]),
            Fighting => TypeRelations::new(
                &[Normal, Rock, Steel, Ice, Dark],
                &[Flying, Poison, Bug, Psychic, Fairy],
                &[Ghost],
            ),
            Flying => TypeRelations::new(&[Fighting, Bug, Grass], &[Rock, Steel, Electric], &[]),
            Poison => TypeRelations::new(&[Grass, Fairy], &[Poison, Ground, Rock, Ghost], &[Steel]),
            Ground => TypeRelations::new(
                &[Poison, Rock, Steel, Fire, Electric],
                &[Bug, Grass],
                &[Flying],
            ),
            Rock => TypeRelations::new(&[Flying, Bug, Fire, Ice], &[Fighting, Ground, Steel], &[]),
            Bug => TypeRelations::new(
                &[Grass, Psychic, Dark],
                &[Fighting, Flying, Poison, Ghost, Steel, Fire, Fairy],
                &[],
            ),
            Ghost => TypeRelations::new(&[Ghost, Psychic], &[Dark], &[Normal]),
            Steel => TypeRelations::new(&[Rock, Ice, Fairy], &[Steel, Fire, Water, Electric], &[]),
            Fire => TypeRelations::new(
                &[Bug, Steel, Grass, Ice],
                &[Rock, Fire, Water, Dragon],
                &[],
            ),
            Water => TypeRelations::new(&[Ground, Rock, Fire], &[Water, Grass, Dragon], &[]),
            Grass => TypeRelations::new(
                &[Ground, Rock, Water],
                &[Flying, Poison, Bug, Steel, Fire, Grass, Dragon],
                &[],
            ),
            Electric => TypeRelations::new(&[Flying, Water], &[Grass, Electric, Dragon], &[Ground]),
            Psychic => TypeRelations::new(&[Fighting, Poison], &[Steel, Psychic], &[Dark]),
            Ice => TypeRelations::new(
                &[Flying, Ground, Grass, Dragon],
                &[Steel, Fire, Water, Ice],
                &[],
            ),
            Dragon => TypeRelations::new(&[Dragon], &[Steel], &[Fairy]),
            Dark => TypeRelations::new(&[Ghost, Psychic], &[Fighting, Dark, Fairy], &[]),
            Fairy => TypeRelations::new(&[Fighting, Dragon, Dark], &[Poison, Steel, Fire], &[]),
        }
    }
}

/// A type chart, which contains all type effectiveness information for types against other types.
///
/// Rows are indexed by the attacking type and columns by the defending type. Every pair has
/// exactly one entry; pairs not named by any [`TypeRelations`] list are
/// [`TypeEffectiveness::Normal`].
#[derive(Debug, Clone, PartialEq)]
pub struct TypeChart {
    table: [[TypeEffectiveness; Type::COUNT]; Type::COUNT],
}

impl TypeChart {
    fn build() -> Self {
        let mut table = [[TypeEffectiveness::Normal; Type::COUNT]; Type::COUNT];
        for attacker in Type::ALL {
            let row = &mut table[attacker.index()];
            let relations = attacker.relations();
            for defender in relations.super_effective {
                row[defender.index()] = TypeEffectiveness::Strong;
            }
            for defender in relations.not_very_effective {
                row[defender.index()] = TypeEffectiveness::Weak;
            }
            for defender in relations.no_effect {
                row[defender.index()] = TypeEffectiveness::None;
            }
        }
        Self { table }
    }

    /// Effectiveness of a single attacking type against a single defending type.
    pub fn effectiveness(&self, attacker: Type, defender: Type) -> TypeEffectiveness {
        self.table[attacker.index()][defender.index()]
    }

    /// Effectiveness of an attacking type against a full typing.
    ///
    /// The product of each defending type's entry. An immunity from either type always wins.
    pub fn combined_effectiveness(&self, attacker: Type, defenders: &TypeSet) -> f32 {
        let mut multiplier = 1f32;
        for defender in defenders {
            let entry = self.effectiveness(attacker, defender);
            if entry == TypeEffectiveness::None {
                return 0f32;
            }
            multiplier *= f32::from(entry);
        }
        multiplier
    }
}

struct ChartRow<'c>(&'c [TypeEffectiveness; Type::COUNT]);

impl Serialize for ChartRow<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(Type::COUNT))?;
        for defender in Type::ALL {
            map.serialize_entry(&defender, &self.0[defender.index()])?;
        }
        map.end()
    }
}

impl Serialize for TypeChart {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(Type::COUNT))?;
        for attacker in Type::ALL {
            map.serialize_entry(&attacker, &ChartRow(&self.table[attacker.index()]))?;
        }
        map.end()
    }
}

static TYPE_CHART: LazyLock<TypeChart> = LazyLock::new(TypeChart::build);

/// The shared, read-only type chart.
pub fn type_chart() -> &'static TypeChart {
    &TYPE_CHART
}

/// Effectiveness of a single attacking type against a single defending type.
pub fn effectiveness(attacker: Type, defender: Type) -> TypeEffectiveness {
    type_chart().effectiveness(attacker, defender)
}

/// Effectiveness of an attacking type against a full typing.
pub fn combined_effectiveness(attacker: Type, defenders: &TypeSet) -> f32 {
    type_chart().combined_effectiveness(attacker, defenders)
}
