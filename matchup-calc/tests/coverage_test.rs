use ahash::HashMap;
use anyhow::Result;
use assert_matches::assert_matches;
use matchup_calc::coverage::{
    RosterEntry,
    TeamCoverageReport,
    analyze,
    analyze_many,
};
use matchup_data::{
    ConfigError,
    Type,
    TypeSet,
};
use pretty_assertions::assert_eq;
use pretty_assertions_sorted::assert_eq_sorted;

fn roster() -> Result<Vec<RosterEntry>> {
    Ok(serde_json::from_str(
        r#"[
            {
                "species": "Charizard",
                "types": ["Fire", "Flying"]
            },
            {
                "species": "Venusaur",
                "types": ["Grass", "Poison"]
            },
            {
                "species": "Blastoise",
                "types": ["Water"]
            }
        ]"#,
    )?)
}

#[test]
fn reports_starter_roster_coverage() {
    assert_matches!(analyze(&roster().unwrap()), Ok(report) => {
        assert!(report.team_offensive_coverage.contains(&Type::Grass));
        assert!(report.team_offensive_coverage.contains(&Type::Water));
        assert!(report.team_offensive_coverage.contains(&Type::Ground));
        assert!(report.team_offensive_coverage.contains(&Type::Rock));
        assert_eq!(report.team_offensive_coverage.len(), 10);

        assert_eq_sorted!(
            report.defensive_weak_counts,
            HashMap::from_iter(Type::ALL.into_iter().map(|typ| {
                let count = match typ {
                    Type::Electric => 2,
                    Type::Flying
                    | Type::Rock
                    | Type::Fire
                    | Type::Water
                    | Type::Grass
                    | Type::Psychic
                    | Type::Ice => 1,
                    _ => 0,
                };
                (typ, count)
            }))
        );
        assert_eq!(
            report.weaknesses_by_severity(),
            Vec::from([
                (Type::Electric, 2),
                (Type::Flying, 1),
                (Type::Rock, 1),
                (Type::Fire, 1),
                (Type::Water, 1),
                (Type::Grass, 1),
                (Type::Psychic, 1),
                (Type::Ice, 1),
            ])
        );
        assert_eq!(
            report.unresisted_weaknesses(),
            Vec::from([Type::Flying, Type::Rock, Type::Psychic])
        );

        for (typ, count) in [
            (Type::Fighting, 2),
            (Type::Bug, 1),
            (Type::Steel, 2),
            (Type::Fire, 2),
            (Type::Water, 2),
            (Type::Grass, 2),
            (Type::Electric, 1),
            (Type::Ice, 1),
            (Type::Fairy, 2),
            (Type::Rock, 0),
            (Type::Normal, 0),
        ] {
            assert_eq!(report.resist_count(typ), count, "{typ}");
        }
        assert_eq!(report.immune_count(Type::Ground), 1);
        assert_eq!(
            Type::ALL
                .into_iter()
                .map(|typ| report.immune_count(typ) as u32)
                .sum::<u32>(),
            1
        );
    });
}

#[test]
fn identical_members_share_every_weakness() {
    for typ in Type::ALL {
        for size in 1..=6 {
            let roster = vec![RosterEntry::new("Clone", TypeSet::single(typ)); size];
            let report = analyze(&roster).unwrap();
            for attacker in Type::ALL {
                let count = report.weak_count(attacker) as usize;
                assert!(
                    count == 0 || count == size,
                    "{size} x {typ} weak to {attacker}: {count}"
                );
            }
        }
    }
}

#[test]
fn empty_roster_is_an_error() {
    assert_matches!(analyze(&[]), Err(ConfigError::EmptyRoster));
}

#[test]
fn analyzes_candidate_rosters_in_parallel() {
    let candidates = Type::ALL
        .into_iter()
        .map(|typ| {
            let mut roster = roster().unwrap();
            roster.push(RosterEntry::new("Candidate", TypeSet::single(typ)));
            roster
        })
        .collect::<Vec<_>>();
    let reports = analyze_many(&candidates);
    assert_eq!(reports.len(), Type::COUNT);
    for (candidate, report) in candidates.iter().zip(reports) {
        assert_eq!(report, analyze(candidate));
    }

    // Adding a Rock member covers the team's shared Flying weakness.
    let rock = reports_for(Type::Rock, &candidates);
    assert!(!rock.unresisted_weaknesses().contains(&Type::Flying));
}

fn reports_for(typ: Type, candidates: &[Vec<RosterEntry>]) -> TeamCoverageReport {
    analyze_many(candidates)
        .into_iter()
        .nth(typ.index())
        .unwrap()
        .unwrap()
}

#[test]
fn serializes_report_counts_by_type_name() {
    let report = analyze(&roster().unwrap()).unwrap();
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["defensive_weak_counts"]["Electric"], 2);
    assert_eq!(value["defensive_immune_counts"]["Ground"], 1);
    assert_eq!(value["defensive_resist_counts"]["Normal"], 0);
}
