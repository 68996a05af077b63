use ahash::{
    HashSet,
    HashSetExt,
};
use matchup_data::{
    Effectiveness,
    Type,
    TypeSet,
    combined_effectiveness,
};
use serde::{
    Deserialize,
    Serialize,
};

/// Every attacking type, bucketed by how effective it is against a defender.
///
/// The six buckets partition [`Type::ALL`]. Each bucket is in chart order.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaknessProfile {
    pub immune: Vec<Type>,
    pub very_resistant: Vec<Type>,
    pub resistant: Vec<Type>,
    pub neutral: Vec<Type>,
    pub weak: Vec<Type>,
    pub very_weak: Vec<Type>,
}

impl WeaknessProfile {
    /// The bucket for the given effectiveness.
    pub fn bucket(&self, effectiveness: Effectiveness) -> &[Type] {
        match effectiveness {
            Effectiveness::Immune => &self.immune,
            Effectiveness::DoubleResisted => &self.very_resistant,
            Effectiveness::Resisted => &self.resistant,
            Effectiveness::Neutral => &self.neutral,
            Effectiveness::SuperEffective => &self.weak,
            Effectiveness::DoubleSuperEffective => &self.very_weak,
        }
    }

    fn bucket_mut(&mut self, effectiveness: Effectiveness) -> &mut Vec<Type> {
        match effectiveness {
            Effectiveness::Immune => &mut self.immune,
            Effectiveness::DoubleResisted => &mut self.very_resistant,
            Effectiveness::Resisted => &mut self.resistant,
            Effectiveness::Neutral => &mut self.neutral,
            Effectiveness::SuperEffective => &mut self.weak,
            Effectiveness::DoubleSuperEffective => &mut self.very_weak,
        }
    }

    /// Types that hit for 2x or 4x.
    pub fn weaknesses(&self) -> impl Iterator<Item = Type> + '_ {
        self.weak.iter().chain(self.very_weak.iter()).copied()
    }

    /// Types that hit for 0.5x or 0.25x.
    pub fn resistances(&self) -> impl Iterator<Item = Type> + '_ {
        self.resistant
            .iter()
            .chain(self.very_resistant.iter())
            .copied()
    }

    /// Total number of types across all buckets.
    pub fn len(&self) -> usize {
        self.immune.len()
            + self.very_resistant.len()
            + self.resistant.len()
            + self.neutral.len()
            + self.weak.len()
            + self.very_weak.len()
    }
}

/// What a set of attacking types can hit, from the attacking side of the chart.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageSet {
    pub super_effective: HashSet<Type>,
    pub not_very_effective: HashSet<Type>,
    pub no_effect: HashSet<Type>,
}

/// Buckets all 18 attacking types by their combined effectiveness against the defender.
pub fn weakness_profile(defender: &TypeSet) -> WeaknessProfile {
    let mut profile = WeaknessProfile::default();
    for attacker in Type::ALL {
        let effectiveness = Effectiveness::from(combined_effectiveness(attacker, defender));
        profile.bucket_mut(effectiveness).push(attacker);
    }
    profile
}

/// The union of each attacking type's outgoing relations.
///
/// An attacker with two types covers anything either type covers. A target can appear in more
/// than one set when the attacker's types disagree about it.
pub fn offensive_coverage(attacker: &TypeSet) -> CoverageSet {
    let mut coverage = CoverageSet {
        super_effective: HashSet::new(),
        not_very_effective: HashSet::new(),
        no_effect: HashSet::new(),
    };
    for typ in attacker {
        let relations = typ.relations();
        coverage
            .super_effective
            .extend(relations.super_effective.iter().copied());
        coverage
            .not_very_effective
            .extend(relations.not_very_effective.iter().copied());
        coverage
            .no_effect
            .extend(relations.no_effect.iter().copied());
    }
    coverage
}
