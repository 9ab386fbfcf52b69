//! Whole-season generation with a one-time seeded shuffle.
//!
//! The team order is shuffled once, before week 1, and then held fixed so
//! the circle method's rotation stays coherent across the season. The random
//! source is injected by the caller: the same seed always reproduces the
//! same schedule, which keeps regeneration after a failure idempotent.

use std::collections::BTreeSet;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, Result};
use crate::schedule::round_robin::{pairings_for_week, WeekPairing};
use crate::types::ids::TeamId;
use crate::types::player::{validate_team_set, Team};

/// A fully generated season: every requested week's pairings plus the
/// shuffled team order they were generated from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonSchedule {
    pub team_order: Vec<TeamId>,
    pub weeks: Vec<WeekPairing>,
}

/// Shuffles the team order in place using the injected random source.
pub fn shuffle_teams<R: Rng + ?Sized>(teams: &mut [Team], rng: &mut R) {
    use rand::seq::SliceRandom;
    teams.shuffle(rng);
}

/// Generates a season schedule from a seed.
///
/// Convenience wrapper over [`generate_season_with`]; the seed fully
/// determines the output, so a retry with the same inputs recomputes the
/// identical schedule.
pub fn generate_season(teams: &[Team], total_weeks: u32, seed: u64) -> Result<SeasonSchedule> {
    generate_season_with(teams, total_weeks, &mut SmallRng::seed_from_u64(seed))
}

/// Generates a season schedule with a caller-supplied random source.
///
/// The whole schedule is computed in memory and every week is checked for
/// coverage before anything is returned: a coverage failure aborts the run
/// with [`EngineError::ScheduleIntegrityViolation`] rather than handing the
/// caller a partial season.
pub fn generate_season_with<R: Rng + ?Sized>(
    teams: &[Team],
    total_weeks: u32,
    rng: &mut R,
) -> Result<SeasonSchedule> {
    validate_team_set(teams, 2)?;
    if total_weeks == 0 {
        return Err(EngineError::InvalidWeek { week: 0 });
    }

    let mut order: Vec<Team> = teams.to_vec();
    shuffle_teams(&mut order, rng);
    debug!(teams = order.len(), total_weeks, "generating season schedule");

    let mut weeks = Vec::with_capacity(total_weeks as usize);
    for week in 1..=total_weeks {
        weeks.push(pairings_for_week(&order, week)?);
    }

    for pairing in &weeks {
        verify_week_coverage(teams, pairing)?;
    }

    Ok(SeasonSchedule {
        team_order: order.into_iter().map(|t| t.id).collect(),
        weeks,
    })
}

/// Checks that a week's pairings cover every team exactly once.
///
/// A failure signals a defect in pairing generation, never a recoverable
/// condition, so callers must abort the schedule run instead of persisting
/// a partial result.
pub fn verify_week_coverage(teams: &[Team], pairing: &WeekPairing) -> Result<()> {
    let expected: BTreeSet<TeamId> = teams.iter().map(|t| t.id).collect();
    let mut seen = BTreeSet::new();

    for matchup in &pairing.matchups {
        for id in matchup.team_ids() {
            if !expected.contains(&id) {
                return Err(EngineError::ScheduleIntegrityViolation {
                    week: pairing.week,
                    reason: format!("unknown team id {}", id),
                });
            }
            if !seen.insert(id) {
                return Err(EngineError::ScheduleIntegrityViolation {
                    week: pairing.week,
                    reason: format!("team {} appears twice", id),
                });
            }
        }
    }

    if seen.len() != expected.len() {
        let missing: Vec<String> = expected
            .difference(&seen)
            .map(|id| id.to_string())
            .collect();
        return Err(EngineError::ScheduleIntegrityViolation {
            week: pairing.week,
            reason: format!("teams not covered: {}", missing.join(", ")),
        });
    }

    Ok(())
}
