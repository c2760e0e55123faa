//! Repository port traits for scorebook storage.

use async_trait::async_trait;
use scorebook_domain::{AtBat, AtBatId, Game, GameId, PlayerId, PlayerStatistics};

use super::error::RepoError;

// =============================================================================
// Database Ports (one per record type)
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GameRepo: Send + Sync {
    async fn get(&self, id: GameId) -> Result<Option<Game>, RepoError>;
    /// Insert or replace. Status transitions save the replacement `Game`.
    async fn save(&self, game: &Game) -> Result<(), RepoError>;
    async fn list(&self) -> Result<Vec<Game>, RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AtBatRepo: Send + Sync {
    async fn get(&self, id: AtBatId) -> Result<Option<AtBat>, RepoError>;
    /// At-bats are append-only; saving an existing id is a constraint violation.
    async fn save(&self, at_bat: &AtBat) -> Result<(), RepoError>;
    /// Every at-bat of a game in recording order, corrections included.
    async fn list_for_game(&self, game_id: GameId) -> Result<Vec<AtBat>, RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlayerStatsRepo: Send + Sync {
    async fn get(&self, player_id: PlayerId) -> Result<Option<PlayerStatistics>, RepoError>;
    async fn save(&self, stats: &PlayerStatistics) -> Result<(), RepoError>;
    async fn list(&self) -> Result<Vec<PlayerStatistics>, RepoError>;
}
