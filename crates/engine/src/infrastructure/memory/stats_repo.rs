//! Player statistics storage.

use async_trait::async_trait;
use dashmap::DashMap;
use scorebook_domain::{PlayerId, PlayerStatistics};

use crate::infrastructure::ports::{PlayerStatsRepo, RepoError};

#[derive(Default)]
pub struct InMemoryPlayerStatsRepo {
    stats: DashMap<PlayerId, PlayerStatistics>,
}

impl InMemoryPlayerStatsRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlayerStatsRepo for InMemoryPlayerStatsRepo {
    async fn get(&self, player_id: PlayerId) -> Result<Option<PlayerStatistics>, RepoError> {
        Ok(self.stats.get(&player_id).map(|entry| entry.value().clone()))
    }

    async fn save(&self, stats: &PlayerStatistics) -> Result<(), RepoError> {
        self.stats.insert(stats.player_id(), stats.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<PlayerStatistics>, RepoError> {
        let mut all: Vec<PlayerStatistics> =
            self.stats.iter().map(|entry| entry.value().clone()).collect();
        all.sort_by_key(PlayerStatistics::player_id);
        Ok(all)
    }
}
