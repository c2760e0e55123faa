//! Game status transition use cases.
//!
//! Each transition runs against a copy of the live session. The copy is
//! committed only after the replacement `Game` has been saved, so a storage
//! failure leaves the live session as it was.

use std::sync::Arc;

use scorebook_domain::{DomainError, GameId, GameSession, PlayerStatistics, SessionUpdate};

use crate::infrastructure::ports::{GameRepo, PlayerStatsRepo};
use crate::stores::SessionStore;

use super::error::LifecycleError;

async fn apply_transition(
    games: &dyn GameRepo,
    sessions: &SessionStore,
    game_id: GameId,
    action: &'static str,
    transition: impl FnOnce(&mut GameSession) -> Result<SessionUpdate, DomainError>,
) -> Result<(GameSession, SessionUpdate), LifecycleError> {
    let mut live = sessions
        .lock(game_id)
        .await
        .ok_or(LifecycleError::SessionNotFound(game_id))?;

    let mut next = live.session.clone();
    let update = transition(&mut next).map_err(|e| {
        tracing::warn!(game_id = %game_id, action, error = %e, "Rejected game transition");
        e
    })?;
    games.save(next.game()).await?;

    live.session = next.clone();
    tracing::info!(game_id = %game_id, action, status = %next.status(), "Game status changed");
    Ok((next, update))
}

/// `Setup -> InProgress`. Every player in the lineup is credited with a game.
pub struct StartGame {
    games: Arc<dyn GameRepo>,
    player_stats: Arc<dyn PlayerStatsRepo>,
    sessions: Arc<SessionStore>,
}

impl StartGame {
    pub fn new(
        games: Arc<dyn GameRepo>,
        player_stats: Arc<dyn PlayerStatsRepo>,
        sessions: Arc<SessionStore>,
    ) -> Self {
        Self {
            games,
            player_stats,
            sessions,
        }
    }

    pub async fn execute(&self, game_id: GameId) -> Result<SessionUpdate, LifecycleError> {
        let (session, update) = apply_transition(
            self.games.as_ref(),
            &self.sessions,
            game_id,
            "start",
            GameSession::start_game,
        )
        .await?;

        for &player in session.lineup().players() {
            let current = self
                .player_stats
                .get(player)
                .await?
                .unwrap_or_else(|| PlayerStatistics::new(player));
            self.player_stats.save(&current.record_game_played()).await?;
        }
        Ok(update)
    }
}

/// `InProgress -> Suspended`
pub struct SuspendGame {
    games: Arc<dyn GameRepo>,
    sessions: Arc<SessionStore>,
}

impl SuspendGame {
    pub fn new(games: Arc<dyn GameRepo>, sessions: Arc<SessionStore>) -> Self {
        Self { games, sessions }
    }

    pub async fn execute(&self, game_id: GameId) -> Result<SessionUpdate, LifecycleError> {
        let (_, update) = apply_transition(
            self.games.as_ref(),
            &self.sessions,
            game_id,
            "suspend",
            GameSession::suspend_game,
        )
        .await?;
        Ok(update)
    }
}

/// `Suspended -> InProgress`
pub struct ResumeGame {
    games: Arc<dyn GameRepo>,
    sessions: Arc<SessionStore>,
}

impl ResumeGame {
    pub fn new(games: Arc<dyn GameRepo>, sessions: Arc<SessionStore>) -> Self {
        Self { games, sessions }
    }

    pub async fn execute(&self, game_id: GameId) -> Result<SessionUpdate, LifecycleError> {
        let (_, update) = apply_transition(
            self.games.as_ref(),
            &self.sessions,
            game_id,
            "resume",
            GameSession::resume_game,
        )
        .await?;
        Ok(update)
    }
}

/// `InProgress -> Completed`. The scored team's runs come from the session.
pub struct CompleteGame {
    games: Arc<dyn GameRepo>,
    sessions: Arc<SessionStore>,
}

impl CompleteGame {
    pub fn new(games: Arc<dyn GameRepo>, sessions: Arc<SessionStore>) -> Self {
        Self { games, sessions }
    }

    pub async fn execute(
        &self,
        game_id: GameId,
        opponent_runs: u32,
    ) -> Result<SessionUpdate, LifecycleError> {
        let (_, update) = apply_transition(
            self.games.as_ref(),
            &self.sessions,
            game_id,
            "complete",
            |session| {
                let final_score = session.final_score(opponent_runs);
                session.complete_game(final_score)
            },
        )
        .await?;
        Ok(update)
    }
}
