//! Quota and league configuration types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::types::player::Player;
use crate::types::position::Position;

/// Per-position roster targets consulted by the draft need ladder.
///
/// `lineup` is the number of starting-lineup slots at the position, the
/// floor a roster must reach before it can ice a valid lineup. `minimum`
/// and `maximum` are the roster-building targets beyond that floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionTarget {
    pub lineup: usize,
    pub minimum: usize,
    pub maximum: usize,
}

impl PositionTarget {
    pub fn new(lineup: usize, minimum: usize, maximum: usize) -> Self {
        Self {
            lineup,
            minimum,
            maximum,
        }
    }
}

/// Positional roster quotas for the draft allocator.
///
/// Skater positions carry a [`PositionTarget`]; goalies are a fixed
/// allocation (`goalie_count` per team) filled before general drafting
/// begins, so they never appear in `targets`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionQuota {
    pub targets: BTreeMap<Position, PositionTarget>,
    pub goalie_count: usize,
}

impl PositionQuota {
    pub fn new(targets: BTreeMap<Position, PositionTarget>, goalie_count: usize) -> Self {
        Self {
            targets,
            goalie_count,
        }
    }

    /// A conventional 9-position quota: two lines plus four defensemen,
    /// with room to stash extras, and a two-goalie tandem.
    pub fn standard() -> Self {
        let mut targets = BTreeMap::new();
        targets.insert(Position::C, PositionTarget::new(2, 3, 5));
        targets.insert(Position::LW, PositionTarget::new(2, 3, 5));
        targets.insert(Position::RW, PositionTarget::new(2, 3, 5));
        targets.insert(Position::D, PositionTarget::new(4, 5, 7));
        Self::new(targets, 2)
    }

    /// Structural validation of the quota table itself.
    pub fn validate(&self) -> Result<()> {
        if self.targets.contains_key(&Position::G) {
            return Err(EngineError::InvalidQuota {
                reason: "goalies use the fixed goalie_count, not a position target".to_string(),
            });
        }
        for (position, target) in &self.targets {
            if target.minimum > target.maximum {
                return Err(EngineError::InvalidQuota {
                    reason: format!("minimum exceeds maximum for {}", position),
                });
            }
            if target.lineup > target.maximum {
                return Err(EngineError::InvalidQuota {
                    reason: format!("lineup floor exceeds maximum for {}", position),
                });
            }
        }
        Ok(())
    }

    /// Audits a drafted roster against the targets, reporting every position
    /// still short of its roster minimum. An empty result means the roster
    /// meets all minimums.
    pub fn check_roster(&self, roster: &[Player]) -> Vec<(Position, usize)> {
        let mut deficits = Vec::new();
        for (&position, target) in &self.targets {
            let have = roster.iter().filter(|p| p.position == position).count();
            if have < target.minimum {
                deficits.push((position, target.minimum - have));
            }
        }
        let goalies = roster.iter().filter(|p| p.position.is_goalie()).count();
        if goalies < self.goalie_count {
            deficits.push((Position::G, self.goalie_count - goalies));
        }
        deficits
    }
}

/// Starting-lineup slot counts for the lineup assigner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotQuotas {
    pub centers: usize,
    pub left_wings: usize,
    pub right_wings: usize,
    pub defensemen: usize,
    pub goalies: usize,
    pub utility: usize,
}

impl SlotQuotas {
    /// The common 13-starter layout: 2 C, 2 LW, 2 RW, 4 D, 2 G, 1 UTIL.
    pub fn standard() -> Self {
        Self {
            centers: 2,
            left_wings: 2,
            right_wings: 2,
            defensemen: 4,
            goalies: 2,
            utility: 1,
        }
    }

    /// Slot count for a single position, excluding UTIL.
    pub fn for_position(&self, position: Position) -> usize {
        match position {
            Position::C => self.centers,
            Position::LW => self.left_wings,
            Position::RW => self.right_wings,
            Position::D => self.defensemen,
            Position::G => self.goalies,
        }
    }

    /// Total starter slots, UTIL included.
    pub fn total(&self) -> usize {
        Position::ALL
            .iter()
            .map(|&p| self.for_position(p))
            .sum::<usize>()
            + self.utility
    }
}

/// League-level inputs for a schedule generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueScheduleConfig {
    pub team_count: usize,
    pub total_weeks: u32,
    pub roster_size: usize,
    pub draft_rounds: usize,
}

impl LeagueScheduleConfig {
    pub fn validate(&self) -> Result<()> {
        if self.team_count < 2 {
            return Err(EngineError::InvalidTeamSet {
                reason: format!("need at least 2 teams, got {}", self.team_count),
            });
        }
        if self.total_weeks == 0 {
            return Err(EngineError::InvalidWeek { week: 0 });
        }
        if self.roster_size == 0 {
            return Err(EngineError::InvalidQuota {
                reason: "roster size must be positive".to_string(),
            });
        }
        Ok(())
    }
}
