//! Port traits for infrastructure boundaries.
//!
//! These are the only abstractions in the engine. Ports exist for:
//! - Storage of games, at-bats and player statistics
//! - Clock (for testing)

mod error;
mod repos;
mod testing;

pub use error::RepoError;
pub use repos::{AtBatRepo, GameRepo, PlayerStatsRepo};
pub use testing::ClockPort;

#[cfg(test)]
pub use repos::{MockAtBatRepo, MockGameRepo, MockPlayerStatsRepo};
#[cfg(test)]
pub use testing::MockClockPort;
