//! Unit tests for the snake-draft allocator

use super::*;
use crate::types::config::PositionTarget;
use crate::types::ids::PlayerId;

fn team(id: u32) -> Team {
    Team::new(TeamId::new(id), format!("Team {}", id))
}

fn player(id: u64, position: Position, valuation: f64) -> Player {
    Player::new(PlayerId::new(id), format!("P{}", id), position, valuation)
}

fn roster_ids(result: &DraftResult, team: u32) -> Vec<u64> {
    result.roster(TeamId::new(team)).unwrap()
        .iter()
        .map(|p| p.id.as_u64())
        .collect()
}

/// 21 goalies and 42 skaters across 7 teams with a 9-man cap: every roster
/// fills completely and nothing is left over.
#[test]
fn test_seven_team_league_drafts_whole_pool() {
    let mut pool = Vec::new();
    for i in 0..21u64 {
        pool.push(player(i, Position::G, 60.0 + i as f64));
    }
    let skater_positions = [Position::C, Position::LW, Position::RW, Position::D];
    for i in 0..42u64 {
        let position = skater_positions[(i % 4) as usize];
        pool.push(player(100 + i, position, 90.0 - i as f64));
    }

    let teams: Vec<Team> = (1..=7).map(team).collect();
    let mut quotas = PositionQuota::standard();
    quotas.goalie_count = 3;

    let result = allocate(pool.clone(), &teams, &quotas, 9).unwrap();

    for t in &teams {
        let roster = result.roster(t.id).unwrap();
        assert_eq!(roster.len(), 9);
        let goalies = roster.iter().filter(|p| p.position.is_goalie()).count();
        assert_eq!(goalies, 3, "team {} goalie count", t.id);
    }
    assert_eq!(result.total_drafted() + result.free_agents.len(), pool.len());
    assert!(result.free_agents.is_empty());
}

#[test]
fn test_draft_is_reproducible() {
    let mut pool = Vec::new();
    for i in 0..8u64 {
        pool.push(player(i, Position::G, 50.0));
    }
    for i in 0..40u64 {
        let position = [Position::C, Position::LW, Position::RW, Position::D][(i % 4) as usize];
        pool.push(player(100 + i, position, (i % 7) as f64 * 10.0));
    }

    let teams: Vec<Team> = (1..=4).map(team).collect();
    let quotas = PositionQuota::standard();

    let first = allocate(pool.clone(), &teams, &quotas, 10).unwrap();
    let second = allocate(pool, &teams, &quotas, 10).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_snake_order_alternates() {
    let mut targets = std::collections::BTreeMap::new();
    targets.insert(Position::C, PositionTarget::new(2, 3, 5));
    let quotas = PositionQuota::new(targets, 1);

    let pool = vec![
        player(100, Position::G, 90.0),
        player(101, Position::G, 80.0),
        player(1, Position::C, 40.0),
        player(2, Position::C, 30.0),
        player(3, Position::C, 20.0),
        player(4, Position::C, 10.0),
    ];
    let teams = vec![team(1), team(2)];

    let result = allocate(pool, &teams, &quotas, 3).unwrap();

    // Goalies off the top round-robin, then picks snake: 1, 2, 2, 1.
    assert_eq!(roster_ids(&result, 1), vec![100, 1, 4]);
    assert_eq!(roster_ids(&result, 2), vec![101, 2, 3]);
}

#[test]
fn test_need_ladder_beats_raw_valuation() {
    let mut targets = std::collections::BTreeMap::new();
    targets.insert(Position::C, PositionTarget::new(1, 1, 2));
    targets.insert(Position::D, PositionTarget::new(1, 1, 2));
    let quotas = PositionQuota::new(targets, 0);

    let pool = vec![
        player(1, Position::C, 90.0),
        player(2, Position::C, 80.0),
        player(3, Position::D, 10.0),
    ];
    let teams = vec![team(1)];

    let result = allocate(pool, &teams, &quotas, 2).unwrap();

    // Second pick takes the weak defenseman over the strong center: the D
    // lineup floor is still open.
    assert_eq!(roster_ids(&result, 1), vec![1, 3]);
    assert_eq!(result.free_agents.len(), 1);
    assert_eq!(result.free_agents[0].id, PlayerId::new(2));
}

#[test]
fn test_insufficient_goalies_is_fatal() {
    let mut pool: Vec<Player> = (0..20u64).map(|i| player(i, Position::G, 50.0)).collect();
    pool.push(player(100, Position::C, 80.0));

    let teams: Vec<Team> = (1..=7).map(team).collect();
    let mut quotas = PositionQuota::standard();
    quotas.goalie_count = 3;

    let err = allocate(pool, &teams, &quotas, 9).unwrap_err();
    match err {
        EngineError::InsufficientPlayerPool {
            position: Position::G,
            required: 21,
            available: 20,
        } => (),
        other => panic!("Expected InsufficientPlayerPool, got {:?}", other),
    }
}

#[test]
fn test_surplus_goalies_become_free_agents() {
    let mut targets = std::collections::BTreeMap::new();
    targets.insert(Position::C, PositionTarget::new(1, 1, 1));
    let quotas = PositionQuota::new(targets, 1);

    let pool = vec![
        player(1, Position::G, 50.0),
        player(2, Position::G, 40.0),
        player(3, Position::C, 30.0),
    ];
    let teams = vec![team(1)];

    // Cap of 3 leaves room, but the snake never drafts a goalie.
    let result = allocate(pool, &teams, &quotas, 3).unwrap();

    assert_eq!(roster_ids(&result, 1), vec![1, 3]);
    assert_eq!(result.free_agents.len(), 1);
    assert_eq!(
        result.best_available(Position::G).map(|p| p.id),
        Some(PlayerId::new(2))
    );
}

#[test]
fn test_goalie_count_cannot_exceed_cap() {
    let pool = vec![player(1, Position::G, 50.0)];
    let teams = vec![team(1)];
    let mut quotas = PositionQuota::standard();
    quotas.goalie_count = 4;

    assert!(matches!(
        allocate(pool, &teams, &quotas, 3),
        Err(EngineError::InvalidQuota { .. })
    ));
}

#[test]
fn test_empty_pool_yields_empty_rosters() {
    let teams = vec![team(1), team(2)];
    let mut quotas = PositionQuota::standard();
    quotas.goalie_count = 0;

    let result = allocate(Vec::new(), &teams, &quotas, 5).unwrap();
    assert_eq!(result.total_drafted(), 0);
    assert!(result.free_agents.is_empty());
    assert_eq!(result.rosters.len(), 2);
}

#[test]
fn test_no_teams_is_rejected() {
    let quotas = PositionQuota::standard();
    assert!(matches!(
        allocate(Vec::new(), &[], &quotas, 5),
        Err(EngineError::InvalidTeamSet { .. })
    ));
}
