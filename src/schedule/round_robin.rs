//! Circle-method pairing generation for a single week.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::types::ids::TeamId;
use crate::types::player::{validate_team_set, Team};


/// One entry in a week's pairing list: either two teams meeting, or a team
/// sitting the week out. Every team appears in exactly one matchup per week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Matchup {
    Versus { home: TeamId, away: TeamId },
    Bye(TeamId),
}

impl Matchup {
    pub fn team_ids(&self) -> Vec<TeamId> {
        match self {
            Matchup::Versus { home, away } => vec![*home, *away],
            Matchup::Bye(team) => vec![*team],
        }
    }

    pub fn involves(&self, id: TeamId) -> bool {
        self.team_ids().contains(&id)
    }
}

/// The full pairing list for one week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekPairing {
    pub week: u32,
    pub matchups: Vec<Matchup>,
}

impl WeekPairing {
    /// The opponent a team meets this week, or `None` if the team has a bye
    /// or does not appear at all.
    pub fn opponent_of(&self, id: TeamId) -> Option<TeamId> {
        self.matchups.iter().find_map(|m| match m {
            Matchup::Versus { home, away } if *home == id => Some(*away),
            Matchup::Versus { home, away } if *away == id => Some(*home),
            _ => None,
        })
    }

    pub fn bye_team(&self) -> Option<TeamId> {
        self.matchups.iter().find_map(|m| match m {
            Matchup::Bye(team) => Some(*team),
            _ => None,
        })
    }
}

/// Number of weeks before the schedule repeats: `n - 1` for an even team
/// count, `n` for an odd one (each team sits one bye per cycle).
pub fn cycle_length(team_count: usize) -> usize {
    if team_count % 2 == 0 {
        team_count - 1
    } else {
        team_count
    }
}

/// Computes one week's pairings with the circle method.
///
/// The first team stays fixed while the remaining slots rotate one position
/// per round. An odd team count gets a bye sentinel appended to the rotation;
/// whichever team lands opposite the sentinel sits that week out, so at a
/// rotation offset of zero the fixed team takes the bye and the rotated teams
/// pair off among themselves.
///
/// Weeks beyond the cycle length repeat the base cycle, so the caller can ask
/// for any week of an arbitrarily long season.
pub fn pairings_for_week(teams: &[Team], week: u32) -> Result<WeekPairing> {
    validate_team_set(teams, 2)?;
    if week == 0 {
        return Err(EngineError::InvalidWeek { week });
    }

    let n = teams.len();
    let mut slots: Vec<Option<TeamId>> = teams.iter().map(|t| Some(t.id)).collect();
    if n % 2 == 1 {
        slots.push(None);
    }

    let offset = ((week - 1) as usize) % cycle_length(n);
    let rest = &slots[1..];
    let m = rest.len();

    let mut matchups = Vec::with_capacity((n + 1) / 2);
    matchups.push(pair(slots[0], rest[(m - 1 + offset) % m]));
    for i in 0..(m - 1) / 2 {
        matchups.push(pair(rest[(i + offset) % m], rest[(m - 2 - i + offset) % m]));
    }

    Ok(WeekPairing { week, matchups })
}

fn pair(a: Option<TeamId>, b: Option<TeamId>) -> Matchup {
    match (a, b) {
        (Some(home), Some(away)) => Matchup::Versus { home, away },
        (Some(team), None) | (None, Some(team)) => Matchup::Bye(team),
        // A single sentinel is appended at most once per week.
        (None, None) => unreachable!("two bye sentinels in one pairing"),
    }
}
