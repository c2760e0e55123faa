//! In-memory repositories backed by `DashMap`.
//!
//! Used by the scoresheet replay binary and by tests. Every repo is cheap to
//! clone behind an `Arc` and safe to share across tasks.

mod at_bat_repo;
mod game_repo;
mod stats_repo;

use std::sync::Arc;

pub use at_bat_repo::InMemoryAtBatRepo;
pub use game_repo::InMemoryGameRepo;
pub use stats_repo::InMemoryPlayerStatsRepo;

/// One instance of every in-memory repository.
#[derive(Clone, Default)]
pub struct InMemoryRepositories {
    pub games: Arc<InMemoryGameRepo>,
    pub at_bats: Arc<InMemoryAtBatRepo>,
    pub player_stats: Arc<InMemoryPlayerStatsRepo>,
}

impl InMemoryRepositories {
    pub fn new() -> Self {
        Self::default()
    }
}
