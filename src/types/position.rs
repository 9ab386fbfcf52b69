//! Hockey position types and utilities.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fantasy hockey player positions.
///
/// Represents the skating positions and the goaltender. Goalies are treated
/// specially throughout the engine: they are distributed ahead of the snake
/// draft and are never eligible for the UTIL lineup slot.
///
/// # Examples
///
/// ```rust
/// use fhl_engine::Position;
///
/// let center = Position::C;
/// assert_eq!(center.to_string(), "C");
/// assert!(!center.is_goalie());
/// assert!(Position::G.is_goalie());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Position {
    /// Center
    C,
    /// Left wing
    LW,
    /// Right wing
    RW,
    /// Defenseman
    D,
    /// Goaltender
    G,
}

impl Position {
    /// All positions in a fixed evaluation order.
    pub const ALL: [Position; 5] = [
        Position::C,
        Position::LW,
        Position::RW,
        Position::D,
        Position::G,
    ];

    /// Skating positions, excluding the goaltender.
    pub const SKATERS: [Position; 4] = [Position::C, Position::LW, Position::RW, Position::D];

    pub fn is_goalie(&self) -> bool {
        matches!(self, Position::G)
    }

    pub fn is_skater(&self) -> bool {
        !self.is_goalie()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::C => "C",
            Position::LW => "LW",
            Position::RW => "RW",
            Position::D => "D",
            Position::G => "G",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "C" | "CENTER" => Ok(Position::C),
            "LW" | "LEFT WING" => Ok(Position::LW),
            "RW" | "RIGHT WING" => Ok(Position::RW),
            "D" | "DEF" | "DEFENSE" => Ok(Position::D),
            "G" | "GOALIE" => Ok(Position::G),
            other => Err(EngineError::InvalidPosition {
                position: other.to_string(),
            }),
        }
    }
}
