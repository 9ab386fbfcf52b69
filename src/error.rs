//! Error types for the fantasy hockey league engine

use crate::types::position::Position;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

/// Failure taxonomy of the engine.
///
/// Every variant is fatal from the engine's point of view: computations
/// return an explicit error instead of a partial result, and the caller
/// decides whether to retry with corrected input. The engine never drops a
/// player or team to recover.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("invalid team set: {reason}")]
    InvalidTeamSet { reason: String },

    #[error("week {week} pairings failed the coverage check: {reason}")]
    ScheduleIntegrityViolation { week: u32, reason: String },

    #[error("player pool cannot satisfy the {position} quota: need {required}, have {available}")]
    InsufficientPlayerPool {
        position: Position,
        required: usize,
        available: usize,
    },

    #[error("assignment would place {actual} players but the roster holds {expected}")]
    RosterOverflow { expected: usize, actual: usize },

    #[error("invalid quota configuration: {reason}")]
    InvalidQuota { reason: String },

    #[error("week numbers start at 1, got {week}")]
    InvalidWeek { week: u32 },

    #[error("invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("failed to parse identifier: {0}")]
    InvalidId(#[from] std::num::ParseIntError),
}
