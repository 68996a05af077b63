use std::cmp::Reverse;

use ahash::{
    HashMap,
    HashMapExt,
    HashSet,
    HashSetExt,
};
use itertools::Itertools;
use matchup_data::{
    ConfigError,
    Type,
    TypeSet,
};
use rayon::prelude::*;
use serde::{
    Deserialize,
    Serialize,
};

use crate::types::{
    offensive_coverage,
    weakness_profile,
};

/// Most members a roster can have.
pub const MAX_ROSTER_SIZE: usize = 6;

/// A single roster member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub species: String,
    pub types: TypeSet,
}

impl RosterEntry {
    pub fn new<S>(species: S, types: TypeSet) -> Self
    where
        S: Into<String>,
    {
        Self {
            species: species.into(),
            types,
        }
    }
}

/// Offensive and defensive type coverage of a whole roster.
///
/// Every count map has an entry for each of the 18 types, including zero counts. Counts are per
/// member: a member that is 4x weak to a type still counts once.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamCoverageReport {
    /// Types at least one member can hit super-effectively with its own types.
    pub team_offensive_coverage: HashSet<Type>,
    /// Members taking 2x or 4x from each attacking type.
    pub defensive_weak_counts: HashMap<Type, u8>,
    /// Members taking 0.5x or 0.25x from each attacking type.
    pub defensive_resist_counts: HashMap<Type, u8>,
    /// Members taking no damage from each attacking type.
    pub defensive_immune_counts: HashMap<Type, u8>,
}

fn zero_counts() -> HashMap<Type, u8> {
    let mut counts = HashMap::with_capacity(Type::COUNT);
    for typ in Type::ALL {
        counts.insert(typ, 0);
    }
    counts
}

fn increment<I>(counts: &mut HashMap<Type, u8>, types: I)
where
    I: IntoIterator<Item = Type>,
{
    for typ in types {
        *counts.entry(typ).or_default() += 1;
    }
}

impl TeamCoverageReport {
    pub fn weak_count(&self, typ: Type) -> u8 {
        self.defensive_weak_counts
            .get(&typ)
            .copied()
            .unwrap_or_default()
    }

    pub fn resist_count(&self, typ: Type) -> u8 {
        self.defensive_resist_counts
            .get(&typ)
            .copied()
            .unwrap_or_default()
    }

    pub fn immune_count(&self, typ: Type) -> u8 {
        self.defensive_immune_counts
            .get(&typ)
            .copied()
            .unwrap_or_default()
    }

    /// Types no member can hit super-effectively, in chart order.
    pub fn uncovered_types(&self) -> Vec<Type> {
        Type::ALL
            .into_iter()
            .filter(|typ| !self.team_offensive_coverage.contains(typ))
            .collect()
    }

    /// Attacking types the team is weak to, most shared weakness first.
    ///
    /// Ties keep chart order. Types no member is weak to are omitted.
    pub fn weaknesses_by_severity(&self) -> Vec<(Type, u8)> {
        Type::ALL
            .into_iter()
            .map(|typ| (typ, self.weak_count(typ)))
            .filter(|(_, count)| *count > 0)
            .sorted_by_key(|(_, count)| Reverse(*count))
            .collect()
    }

    /// Attacking types some member is weak to that no member resists or is immune to.
    pub fn unresisted_weaknesses(&self) -> Vec<Type> {
        Type::ALL
            .into_iter()
            .filter(|typ| {
                self.weak_count(*typ) > 0
                    && self.resist_count(*typ) == 0
                    && self.immune_count(*typ) == 0
            })
            .collect()
    }
}

/// Analyzes the type coverage of a roster of 1 to 6 members.
pub fn analyze(roster: &[RosterEntry]) -> Result<TeamCoverageReport, ConfigError> {
    if roster.is_empty() {
        return Err(ConfigError::EmptyRoster);
    }
    if roster.len() > MAX_ROSTER_SIZE {
        return Err(ConfigError::RosterTooLarge { size: roster.len() });
    }

    let mut report = TeamCoverageReport {
        team_offensive_coverage: HashSet::with_capacity(Type::COUNT),
        defensive_weak_counts: zero_counts(),
        defensive_resist_counts: zero_counts(),
        defensive_immune_counts: zero_counts(),
    };
    for entry in roster {
        report
            .team_offensive_coverage
            .extend(offensive_coverage(&entry.types).super_effective);

        let profile = weakness_profile(&entry.types);
        increment(&mut report.defensive_weak_counts, profile.weaknesses());
        increment(&mut report.defensive_resist_counts, profile.resistances());
        increment(
            &mut report.defensive_immune_counts,
            profile.immune.iter().copied(),
        );
    }
    Ok(report)
}

/// Analyzes many candidate rosters in parallel.
///
/// Results are in the same order as the input.
pub fn analyze_many(rosters: &[Vec<RosterEntry>]) -> Vec<Result<TeamCoverageReport, ConfigError>> {
    rosters.par_iter().map(|roster| analyze(roster)).collect()
}

#[cfg(test)]
mod coverage_test {
    use ahash::HashSet;
    use assert_matches::assert_matches;
    use matchup_data::{
        ConfigError,
        Type,
        TypeSet,
    };
    use pretty_assertions::assert_eq;

    use crate::coverage::{
        RosterEntry,
        analyze,
        analyze_many,
    };

    fn charizard() -> RosterEntry {
        RosterEntry::new("Charizard", TypeSet::dual(Type::Fire, Type::Flying).unwrap())
    }

    fn venusaur() -> RosterEntry {
        RosterEntry::new("Venusaur", TypeSet::dual(Type::Grass, Type::Poison).unwrap())
    }

    fn blastoise() -> RosterEntry {
        RosterEntry::new("Blastoise", TypeSet::single(Type::Water))
    }

    #[test]
    fn analyzes_starter_roster() {
        assert_matches!(analyze(&[charizard(), venusaur(), blastoise()]), Ok(report) => {
            assert_eq!(
                report.team_offensive_coverage,
                HashSet::from_iter([
                    Type::Bug,
                    Type::Steel,
                    Type::Grass,
                    Type::Ice,
                    Type::Fighting,
                    Type::Ground,
                    Type::Rock,
                    Type::Water,
                    Type::Fairy,
                    Type::Fire,
                ])
            );
            assert_eq!(
                report.uncovered_types(),
                Vec::from([
                    Type::Normal,
                    Type::Flying,
                    Type::Poison,
                    Type::Ghost,
                    Type::Electric,
                    Type::Psychic,
                    Type::Dragon,
                    Type::Dark,
                ])
            );

            // Charizard is 4x weak to Rock but counts once.
            assert_eq!(report.weak_count(Type::Rock), 1);
            assert_eq!(report.weak_count(Type::Electric), 2);
            assert_eq!(report.resist_count(Type::Fire), 2);
            assert_eq!(report.resist_count(Type::Bug), 1);
            assert_eq!(report.immune_count(Type::Ground), 1);
            assert_eq!(report.defensive_weak_counts.len(), 18);
            assert_eq!(report.defensive_resist_counts.len(), 18);
            assert_eq!(report.defensive_immune_counts.len(), 18);
        });
    }

    #[test]
    fn rejects_invalid_roster_size() {
        assert_matches!(analyze(&[]), Err(ConfigError::EmptyRoster));
        assert_matches!(
            analyze(&vec![blastoise(); 7]),
            Err(ConfigError::RosterTooLarge { size: 7 })
        );
        assert_matches!(analyze(&vec![blastoise(); 6]), Ok(_));
    }

    #[test]
    fn counts_duplicate_species() {
        assert_matches!(analyze(&[blastoise(), blastoise()]), Ok(report) => {
            assert_eq!(report.weak_count(Type::Electric), 2);
            assert_eq!(report.weak_count(Type::Grass), 2);
            assert_eq!(report.resist_count(Type::Water), 2);
        });
    }

    #[test]
    fn analyzes_many_rosters_in_order() {
        let results = analyze_many(&[
            Vec::from([charizard()]),
            Vec::new(),
            Vec::from([venusaur(), blastoise()]),
        ]);
        assert_eq!(results.len(), 3);
        assert_matches!(&results[0], Ok(report) => {
            assert_eq!(report.weak_count(Type::Rock), 1);
            assert_eq!(report.weak_count(Type::Psychic), 0);
        });
        assert_matches!(&results[1], Err(ConfigError::EmptyRoster));
        assert_matches!(&results[2], Ok(report) => {
            assert_eq!(report.weak_count(Type::Psychic), 1);
            assert_eq!(report.weak_count(Type::Rock), 0);
        });
    }
}
