//! Fantasy Hockey League Engine
//!
//! The season-scheduling and roster-allocation core of a fantasy hockey
//! league platform: pure, deterministic computations over in-memory data.
//! Persistence, HTTP, notification, and UI live in the orchestration layer
//! that calls this crate; the engine consumes and produces plain data
//! structures and holds no state between calls.
//!
//! ## Features
//!
//! - **Round-Robin Scheduling**: circle-method pairings for any team count,
//!   with byes for odd leagues and cycle repetition for long seasons
//! - **Seeded Season Generation**: one-time team shuffle from an injected
//!   seed, validated week coverage before anything is handed back
//! - **Snake Draft Simulation**: position-constrained drafting over a ranked
//!   pool, with a fixed goalie allocation and a free-agent remainder
//! - **Lineup Assignment**: starters, bench, and injury reserve with stable
//!   human-addressable slot labels like `C-1` and `IR-2`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fhl_engine::schedule::generate_season;
//! use fhl_engine::{Team, TeamId};
//!
//! # fn example() -> fhl_engine::Result<()> {
//! let teams: Vec<Team> = (1..=8)
//!     .map(|i| Team::new(TeamId::new(i), format!("Team {}", i)))
//!     .collect();
//!
//! // The seed fully determines the schedule, so retries reproduce it.
//! let season = generate_season(&teams, 21, 42)?;
//! assert_eq!(season.weeks.len(), 21);
//! # Ok(())
//! # }
//! ```

pub mod draft;
pub mod error;
pub mod lineup;
pub mod schedule;
pub mod types;

// Re-export commonly used types
pub use draft::{DraftResult, DraftSettings};
pub use error::{EngineError, Result};
pub use lineup::{LineupAssignment, SlotLabel};
pub use schedule::{Matchup, SeasonSchedule, WeekPairing};
pub use types::{
    LeagueScheduleConfig, Player, PlayerId, Position, PositionQuota, PositionTarget, SlotQuotas,
    Team, TeamId,
};
