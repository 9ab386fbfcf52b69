//! Integration tests for round-robin schedule generation

use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;

use fhl_engine::schedule::{cycle_length, generate_season, pairings_for_week};
use fhl_engine::{Matchup, Team, TeamId, WeekPairing};

fn teams(count: u32) -> Vec<Team> {
    (1..=count)
        .map(|i| Team::new(TeamId::new(i), format!("Team {}", i)))
        .collect()
}

fn unordered_pairs(pairing: &WeekPairing) -> Vec<(TeamId, TeamId)> {
    pairing
        .matchups
        .iter()
        .filter_map(|m| match m {
            Matchup::Versus { home, away } => {
                Some(if home < away { (*home, *away) } else { (*away, *home) })
            }
            Matchup::Bye(_) => None,
        })
        .collect()
}

#[test]
fn ten_team_week_ten_reproduces_week_one() {
    let teams = teams(10);
    assert_eq!(cycle_length(10), 9);

    let week_one = pairings_for_week(&teams, 1).unwrap();
    let week_ten = pairings_for_week(&teams, 10).unwrap();
    assert_eq!(week_one.matchups, week_ten.matchups);
}

#[test]
fn five_named_teams_week_one() {
    let names = ["A", "B", "C", "D", "E"];
    let teams: Vec<Team> = names
        .iter()
        .enumerate()
        .map(|(i, name)| Team::new(TeamId::new(i as u32 + 1), *name))
        .collect();

    let pairing = pairings_for_week(&teams, 1).unwrap();

    // Team A sits out; B meets E and C meets D.
    let a = TeamId::new(1);
    let (b, c, d, e) = (TeamId::new(2), TeamId::new(3), TeamId::new(4), TeamId::new(5));

    assert_eq!(pairing.bye_team(), Some(a));
    let pairs = unordered_pairs(&pairing);
    assert!(pairs.contains(&(b, e)));
    assert!(pairs.contains(&(c, d)));
    assert_eq!(pairs.len(), 2);
}

#[test]
fn generated_season_is_seed_deterministic() {
    let teams = teams(12);
    let first = generate_season(&teams, 26, 2026).unwrap();
    let second = generate_season(&teams, 26, 2026).unwrap();
    assert_eq!(first, second);
}

#[test]
fn generated_season_weeks_are_numbered_from_one() {
    let teams = teams(6);
    let season = generate_season(&teams, 8, 5).unwrap();
    let weeks: Vec<u32> = season.weeks.iter().map(|w| w.week).collect();
    assert_eq!(weeks, (1..=8).collect::<Vec<u32>>());
}

#[test]
fn week_pairing_serializes_round_trip() {
    let teams = teams(5);
    let pairing = pairings_for_week(&teams, 3).unwrap();

    let json = serde_json::to_string(&pairing).unwrap();
    let back: WeekPairing = serde_json::from_str(&json).unwrap();
    assert_eq!(pairing, back);
}

proptest! {
    /// Even team counts: one full cycle meets every unordered pair exactly
    /// once and nobody sits out.
    #[test]
    fn even_cycle_covers_every_pair_once(half in 1usize..=10) {
        let n = 2 * half;
        let teams = teams(n as u32);
        let mut seen: BTreeSet<(TeamId, TeamId)> = BTreeSet::new();

        for week in 1..=cycle_length(n) as u32 {
            let pairing = pairings_for_week(&teams, week).unwrap();
            prop_assert!(pairing.bye_team().is_none());
            for pair in unordered_pairs(&pairing) {
                prop_assert!(seen.insert(pair), "pair {:?} met twice", pair);
            }
        }

        prop_assert_eq!(seen.len(), n * (n - 1) / 2);
    }

    /// Odd team counts: one full cycle gives each team exactly one bye and
    /// meets every unordered pair exactly once.
    #[test]
    fn odd_cycle_gives_one_bye_each(half in 1usize..=10) {
        let n = 2 * half + 1;
        let teams = teams(n as u32);
        let mut byes: BTreeMap<TeamId, usize> = BTreeMap::new();
        let mut seen: BTreeSet<(TeamId, TeamId)> = BTreeSet::new();

        for week in 1..=cycle_length(n) as u32 {
            let pairing = pairings_for_week(&teams, week).unwrap();
            let bye = pairing.bye_team().expect("odd week without a bye");
            *byes.entry(bye).or_insert(0) += 1;
            for pair in unordered_pairs(&pairing) {
                prop_assert!(seen.insert(pair), "pair {:?} met twice", pair);
            }
        }

        prop_assert_eq!(byes.len(), n);
        prop_assert!(byes.values().all(|&count| count == 1));
        prop_assert_eq!(seen.len(), n * (n - 1) / 2);
    }

    /// Weeks beyond the cycle replay the base cycle.
    #[test]
    fn late_weeks_repeat_the_cycle(n in 2usize..=11, week in 1u32..=120) {
        let teams = teams(n as u32);
        let cycle = cycle_length(n) as u32;
        let base_week = ((week - 1) % cycle) + 1;

        let late = pairings_for_week(&teams, week).unwrap();
        let base = pairings_for_week(&teams, base_week).unwrap();
        prop_assert_eq!(late.matchups, base.matchups);
    }

    /// Every team appears in exactly one matchup per week, whatever the
    /// count and week.
    #[test]
    fn weekly_coverage_is_total(n in 2usize..=15, week in 1u32..=40) {
        let teams = teams(n as u32);
        let pairing = pairings_for_week(&teams, week).unwrap();

        let mut ids: Vec<TeamId> = pairing
            .matchups
            .iter()
            .flat_map(|m| m.team_ids())
            .collect();
        ids.sort();
        let expected: Vec<TeamId> = (1..=n as u32).map(TeamId::new).collect();
        prop_assert_eq!(ids, expected);
    }
}
