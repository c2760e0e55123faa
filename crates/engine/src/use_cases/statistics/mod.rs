//! Read-side queries over persisted statistics and at-bats.

use std::sync::Arc;

use scorebook_domain::{AtBat, GameId, PlayerId, PlayerStatistics, TeamStatistics};

use crate::infrastructure::ports::{AtBatRepo, PlayerStatsRepo, RepoError};

pub struct StatisticsQueries {
    player_stats: Arc<dyn PlayerStatsRepo>,
    at_bats: Arc<dyn AtBatRepo>,
}

impl StatisticsQueries {
    pub fn new(player_stats: Arc<dyn PlayerStatsRepo>, at_bats: Arc<dyn AtBatRepo>) -> Self {
        Self {
            player_stats,
            at_bats,
        }
    }

    /// A player's batting line; players without a plate appearance get an empty one.
    pub async fn player(&self, player_id: PlayerId) -> Result<PlayerStatistics, RepoError> {
        Ok(self
            .player_stats
            .get(player_id)
            .await?
            .unwrap_or_else(|| PlayerStatistics::new(player_id)))
    }

    /// Lines for `players`, in the given order.
    pub async fn players(&self, players: &[PlayerId]) -> Result<Vec<PlayerStatistics>, RepoError> {
        let mut lines = Vec::with_capacity(players.len());
        for &player in players {
            lines.push(self.player(player).await?);
        }
        Ok(lines)
    }

    pub async fn team(&self, players: &[PlayerId]) -> Result<TeamStatistics, RepoError> {
        let lines = self.players(players).await?;
        Ok(TeamStatistics::from_players(&lines))
    }

    /// Every at-bat recorded for a game, corrections included.
    pub async fn at_bats(&self, game_id: GameId) -> Result<Vec<AtBat>, RepoError> {
        self.at_bats.list_for_game(game_id).await
    }
}
