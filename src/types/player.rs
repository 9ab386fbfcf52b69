//! Team and player data model.
//!
//! These are the plain structures the engine consumes from the input adapter
//! and hands back to the persistence boundary. Positions and valuation scores
//! arrive already resolved; the engine never looks anything up.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::types::ids::{PlayerId, TeamId};
use crate::types::position::Position;

/// A league team. Immutable for scheduling purposes; the roster is attached
/// externally by the orchestration layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
}

impl Team {
    pub fn new(id: TeamId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A rated player in the draft pool or on a roster.
///
/// `valuation` is the scalar ranking score (higher is more desirable).
/// `available` is false for injured or suspended players and is consulted
/// only by the lineup slot assigner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub position: Position,
    pub valuation: f64,
    pub available: bool,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, position: Position, valuation: f64) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            valuation,
            available: true,
        }
    }

    /// Same player with the availability flag cleared.
    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }
}

/// Checks a caller-supplied team list before any computation runs.
///
/// `minimum` is the smallest team count the calling component accepts: the
/// scheduler needs two teams to pair, the draft allocator works from one.
/// Duplicate identifiers are always a fatal input error.
pub fn validate_team_set(teams: &[Team], minimum: usize) -> Result<()> {
    if teams.len() < minimum {
        return Err(EngineError::InvalidTeamSet {
            reason: format!("need at least {} teams, got {}", minimum, teams.len()),
        });
    }

    let mut seen = HashSet::with_capacity(teams.len());
    for team in teams {
        if !seen.insert(team.id) {
            return Err(EngineError::InvalidTeamSet {
                reason: format!("duplicate team id {}", team.id),
            });
        }
    }

    Ok(())
}
