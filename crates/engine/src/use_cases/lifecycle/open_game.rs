//! Open game use case.
//!
//! Creates a `Game` in setup, stores it, and registers its live session.

use std::sync::Arc;

use chrono::NaiveDate;
use scorebook_domain::{Game, GameSession, HomeAway, Lineup, OpponentName, PlayerId};

use crate::infrastructure::ports::GameRepo;
use crate::stores::SessionStore;

use super::error::LifecycleError;

#[derive(Debug, Clone)]
pub struct OpenGameInput {
    pub opponent: String,
    pub date: NaiveDate,
    pub home_away: HomeAway,
    /// Batting order, leadoff first
    pub lineup: Vec<PlayerId>,
}

pub struct OpenGame {
    games: Arc<dyn GameRepo>,
    sessions: Arc<SessionStore>,
}

impl OpenGame {
    pub fn new(games: Arc<dyn GameRepo>, sessions: Arc<SessionStore>) -> Self {
        Self { games, sessions }
    }

    pub async fn execute(&self, input: OpenGameInput) -> Result<Game, LifecycleError> {
        let opponent = OpponentName::new(input.opponent)?;
        let lineup = Lineup::new(input.lineup)?;
        let game = Game::new(opponent, input.date, input.home_away);

        self.games.save(&game).await?;
        if !self.sessions.open(GameSession::new(game.clone(), lineup)) {
            return Err(LifecycleError::AlreadyOpen(game.id()));
        }

        tracing::info!(
            game_id = %game.id(),
            opponent = %game.opponent(),
            date = %game.date(),
            "Opened game"
        );
        Ok(game)
    }
}
