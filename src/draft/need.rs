//! The positional need ladder a picking team walks on each turn.
//!
//! Needs are evaluated tier by tier: first any position still short of its
//! starting-lineup floor, then positions below the roster-target minimum,
//! then positions below the roster-target maximum. Within a tier, positions
//! are checked in the quota table's fixed order. Keeping the ladder an
//! explicit ordered list makes the fill policy auditable tier by tier.

use std::collections::BTreeMap;

use crate::types::config::{PositionQuota, PositionTarget};
use crate::types::position::Position;

/// One rung of the need ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeedTier {
    /// Below the count required to ice a valid starting lineup.
    LineupMinimum,
    /// Below the roster-building minimum.
    RosterMinimum,
    /// Below the roster-building maximum.
    RosterMaximum,
}

/// Evaluation order of the ladder, highest priority first.
pub const NEED_TIERS: [NeedTier; 3] = [
    NeedTier::LineupMinimum,
    NeedTier::RosterMinimum,
    NeedTier::RosterMaximum,
];

impl NeedTier {
    /// The count a position must reach before this tier stops flagging it.
    pub fn threshold(&self, target: &PositionTarget) -> usize {
        match self {
            NeedTier::LineupMinimum => target.lineup,
            NeedTier::RosterMinimum => target.minimum,
            NeedTier::RosterMaximum => target.maximum,
        }
    }
}

/// Every position the roster still needs, ordered by ladder priority.
///
/// A position appears once, at the highest tier that flags it. An empty
/// result means every position target is at its maximum.
pub fn unmet_needs(
    counts: &BTreeMap<Position, usize>,
    quotas: &PositionQuota,
) -> Vec<Position> {
    let mut needs = Vec::new();
    for tier in NEED_TIERS {
        for (&position, target) in &quotas.targets {
            let have = counts.get(&position).copied().unwrap_or(0);
            if have < tier.threshold(target) && !needs.contains(&position) {
                needs.push(position);
            }
        }
    }
    needs
}
