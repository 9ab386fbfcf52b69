//! Snake-draft simulation over a ranked player pool.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::draft::need::unmet_needs;
use crate::draft::ranking::{rank_players, DEFAULT_GOALIE_BASELINE};
use crate::error::{EngineError, Result};
use crate::types::config::PositionQuota;
use crate::types::ids::TeamId;
use crate::types::player::{validate_team_set, Player, Team};
use crate::types::position::Position;

#[cfg(test)]
mod tests;

/// Tuning knobs for a draft run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DraftSettings {
    /// Score assigned to goalies with no recorded statistics.
    pub goalie_baseline: f64,
}

impl Default for DraftSettings {
    fn default() -> Self {
        Self {
            goalie_baseline: DEFAULT_GOALIE_BASELINE,
        }
    }
}

/// The outcome of a simulated draft: one roster per team (insertion order is
/// pick order) and the undrafted remainder as a ranked free-agent pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftResult {
    pub rosters: BTreeMap<TeamId, Vec<Player>>,
    pub free_agents: Vec<Player>,
}

impl DraftResult {
    pub fn roster(&self, team: TeamId) -> Option<&[Player]> {
        self.rosters.get(&team).map(Vec::as_slice)
    }

    /// Highest-ranked free agent at a position, if any remain.
    pub fn best_available(&self, position: Position) -> Option<&Player> {
        self.free_agents.iter().find(|p| p.position == position)
    }

    pub fn total_drafted(&self) -> usize {
        self.rosters.values().map(Vec::len).sum()
    }
}

/// Runs a draft with default settings. See [`allocate_with`].
pub fn allocate(
    players: Vec<Player>,
    teams: &[Team],
    quotas: &PositionQuota,
    roster_cap: usize,
) -> Result<DraftResult> {
    allocate_with(players, teams, quotas, roster_cap, &DraftSettings::default())
}

/// Simulates a position-constrained snake draft.
///
/// Goalies are scarce, so exactly `quotas.goalie_count` of them go to each
/// team round-robin off the top of the ranking before the snake begins. The
/// snake then alternates direction each round; every pick takes the
/// highest-ranked player matching the team's most urgent positional need,
/// falling back to the best remaining skater when no target is open. Teams
/// that reach `roster_cap` are skipped for the remainder of the draft.
///
/// This is a simulation tool for synthetic and demo leagues. Live drafts are
/// recorded pick by pick by the orchestration layer instead.
pub fn allocate_with(
    players: Vec<Player>,
    teams: &[Team],
    quotas: &PositionQuota,
    roster_cap: usize,
    settings: &DraftSettings,
) -> Result<DraftResult> {
    validate_team_set(teams, 1)?;
    quotas.validate()?;
    if quotas.goalie_count > roster_cap {
        return Err(EngineError::InvalidQuota {
            reason: format!(
                "goalie count {} exceeds roster cap {}",
                quotas.goalie_count, roster_cap
            ),
        });
    }

    let ranked = rank_players(players, settings.goalie_baseline);
    let team_ids: Vec<TeamId> = teams.iter().map(|t| t.id).collect();
    let team_count = team_ids.len();

    let required_goalies = team_count * quotas.goalie_count;
    let available_goalies = ranked.iter().filter(|p| p.position.is_goalie()).count();
    if available_goalies < required_goalies {
        return Err(EngineError::InsufficientPlayerPool {
            position: Position::G,
            required: required_goalies,
            available: available_goalies,
        });
    }

    let mut rosters: BTreeMap<TeamId, Vec<Player>> =
        team_ids.iter().map(|&id| (id, Vec::new())).collect();
    let mut counts: BTreeMap<TeamId, BTreeMap<Position, usize>> =
        team_ids.iter().map(|&id| (id, BTreeMap::new())).collect();

    // Fixed goalie allocation off the top of the ranking; the snake never
    // touches the position again, so surplus goalies become free agents.
    let mut pool: Vec<Player> = Vec::with_capacity(ranked.len());
    let mut distributed = 0;
    for player in ranked {
        if player.position.is_goalie() && distributed < required_goalies {
            let team = team_ids[distributed % team_count];
            record_pick(&mut rosters, &mut counts, team, player);
            distributed += 1;
        } else {
            pool.push(player);
        }
    }
    debug!(goalies = distributed, teams = team_count, "goalie quota distributed");

    let mut round = 0;
    loop {
        let mut picked_this_round = false;

        let order: Box<dyn Iterator<Item = &TeamId>> = if round % 2 == 0 {
            Box::new(team_ids.iter())
        } else {
            Box::new(team_ids.iter().rev())
        };

        for &team in order {
            if rosters[&team].len() >= roster_cap {
                continue;
            }
            let Some(index) = select_pick(&pool, &counts[&team], quotas) else {
                continue;
            };
            let player = pool.remove(index);
            record_pick(&mut rosters, &mut counts, team, player);
            picked_this_round = true;
        }

        if !picked_this_round {
            break;
        }
        debug!(round, remaining = pool.len(), "snake round complete");
        round += 1;
    }

    Ok(DraftResult {
        rosters,
        free_agents: pool,
    })
}

/// Index of the best pick for a team, or `None` if nothing in the pool is
/// draftable for it. The pool is ranked, so the first positional match is
/// the highest-ranked one.
fn select_pick(
    pool: &[Player],
    counts: &BTreeMap<Position, usize>,
    quotas: &PositionQuota,
) -> Option<usize> {
    for position in unmet_needs(counts, quotas) {
        if let Some(index) = pool.iter().position(|p| p.position == position) {
            return Some(index);
        }
    }
    // No open target: take the best remaining skater for bench depth.
    pool.iter().position(|p| p.position.is_skater())
}

fn record_pick(
    rosters: &mut BTreeMap<TeamId, Vec<Player>>,
    counts: &mut BTreeMap<TeamId, BTreeMap<Position, usize>>,
    team: TeamId,
    player: Player,
) {
    if let Some(team_counts) = counts.get_mut(&team) {
        *team_counts.entry(player.position).or_insert(0) += 1;
    }
    if let Some(roster) = rosters.get_mut(&team) {
        roster.push(player);
    }
}
