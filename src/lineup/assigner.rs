//! Roster partitioning into starters, bench, and injury reserve.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{EngineError, Result};
use crate::lineup::slots::{SlotBoard, SlotLabel};
use crate::types::config::SlotQuotas;
use crate::types::ids::PlayerId;
use crate::types::player::Player;


/// A team's lineup: every roster player lands in exactly one of the three
/// sets. Starters and injury reserve carry their slot labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineupAssignment {
    pub starters: Vec<(SlotLabel, PlayerId)>,
    pub bench: Vec<PlayerId>,
    pub injury_reserve: Vec<(SlotLabel, PlayerId)>,
}

impl LineupAssignment {
    pub fn total_assigned(&self) -> usize {
        self.starters.len() + self.bench.len() + self.injury_reserve.len()
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.starters.iter().any(|(_, p)| *p == id)
            || self.bench.contains(&id)
            || self.injury_reserve.iter().any(|(_, p)| *p == id)
    }

    /// The slot a player starts in, if they start.
    pub fn starting_slot(&self, id: PlayerId) -> Option<SlotLabel> {
        self.starters
            .iter()
            .find_map(|(label, p)| (*p == id).then_some(*label))
    }
}

/// Partitions a roster into starters, bench, and injury reserve.
///
/// Unavailable players are routed to IR first, in roster order, until
/// `ir_cap` is reached; any excess falls through to the bench rather than
/// being dropped. The remaining players are taken in descending valuation
/// order (ties broken by player id) and greedily placed: a slot at their
/// own position if one is open, else UTIL for skaters, else the bench.
///
/// The assigner never consults game schedules or lock state. Which players
/// may be moved at a point in time is the orchestration layer's policy.
pub fn assign(
    roster: &[Player],
    slot_quotas: &SlotQuotas,
    ir_cap: usize,
) -> Result<LineupAssignment> {
    let mut seen = HashSet::with_capacity(roster.len());
    for player in roster {
        if !seen.insert(player.id) {
            return Err(EngineError::RosterOverflow {
                expected: seen.len(),
                actual: roster.len(),
            });
        }
    }

    let mut assignment = LineupAssignment {
        starters: Vec::new(),
        bench: Vec::new(),
        injury_reserve: Vec::new(),
    };

    let mut active: Vec<&Player> = Vec::with_capacity(roster.len());
    for player in roster {
        if player.available {
            active.push(player);
        } else if assignment.injury_reserve.len() < ir_cap {
            let ordinal = assignment.injury_reserve.len() + 1;
            assignment
                .injury_reserve
                .push((SlotLabel::InjuredReserve { ordinal }, player.id));
        } else {
            warn!(player = %player.id, ir_cap, "injury reserve full, routing to bench");
            assignment.bench.push(player.id);
        }
    }

    active.sort_by(|a, b| {
        b.valuation
            .total_cmp(&a.valuation)
            .then_with(|| a.id.cmp(&b.id))
    });

    let mut board = SlotBoard::new(*slot_quotas);
    for player in active {
        if let Some(label) = board.try_fill(player.position) {
            assignment.starters.push((label, player.id));
        } else if player.position.is_skater() {
            match board.try_fill_utility() {
                Some(label) => assignment.starters.push((label, player.id)),
                None => assignment.bench.push(player.id),
            }
        } else {
            assignment.bench.push(player.id);
        }
    }

    if assignment.total_assigned() != roster.len() {
        return Err(EngineError::RosterOverflow {
            expected: roster.len(),
            actual: assignment.total_assigned(),
        });
    }

    Ok(assignment)
}
