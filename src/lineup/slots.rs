//! Slot labels and fill-order bookkeeping for the starting lineup.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::config::SlotQuotas;
use crate::types::position::Position;

/// A stable, human-addressable lineup slot.
///
/// Ordinals are handed out in the order slots are filled, not pre-numbered:
/// the first center assigned gets `C-1`, the next `C-2`, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotLabel {
    Position { position: Position, ordinal: usize },
    Utility,
    InjuredReserve { ordinal: usize },
}

impl fmt::Display for SlotLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotLabel::Position { position, ordinal } => write!(f, "{}-{}", position, ordinal),
            SlotLabel::Utility => write!(f, "UTIL"),
            SlotLabel::InjuredReserve { ordinal } => write!(f, "IR-{}", ordinal),
        }
    }
}

/// Tracks how many slots are filled at each position while the assigner
/// walks the roster.
#[derive(Debug)]
pub(crate) struct SlotBoard {
    quotas: SlotQuotas,
    filled: BTreeMap<Position, usize>,
    utility_used: usize,
}

impl SlotBoard {
    pub fn new(quotas: SlotQuotas) -> Self {
        Self {
            quotas,
            filled: BTreeMap::new(),
            utility_used: 0,
        }
    }

    /// Claims the next slot at a position, if the quota has room.
    pub fn try_fill(&mut self, position: Position) -> Option<SlotLabel> {
        let filled = self.filled.entry(position).or_insert(0);
        if *filled < self.quotas.for_position(position) {
            *filled += 1;
            Some(SlotLabel::Position {
                position,
                ordinal: *filled,
            })
        } else {
            None
        }
    }

    /// Claims a UTIL slot. Goalie eligibility is the caller's rule.
    pub fn try_fill_utility(&mut self) -> Option<SlotLabel> {
        if self.utility_used < self.quotas.utility {
            self.utility_used += 1;
            Some(SlotLabel::Utility)
        } else {
            None
        }
    }
}
