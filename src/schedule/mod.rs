//! Round-robin season scheduling.
//!
//! [`round_robin`] computes a single week's pairings with the circle method;
//! [`season`] shuffles the team order once, generates every requested week,
//! and validates coverage before handing the schedule to the caller.

pub mod round_robin;
pub mod season;

pub use round_robin::{cycle_length, pairings_for_week, Matchup, WeekPairing};
pub use season::{generate_season, generate_season_with, shuffle_teams, SeasonSchedule};
