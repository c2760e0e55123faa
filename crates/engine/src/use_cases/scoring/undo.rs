//! Undo and redo of scoring actions.
//!
//! Only the live session rewinds. Saved at-bats and folded statistics stay
//! as they are; a wrong play is fixed by recording a correction.

use std::sync::Arc;

use scorebook_domain::{GameId, SessionUpdate};

use crate::stores::{LiveGame, SessionStore};

use super::error::ScoringError;
use super::lock_in_progress;

pub struct UndoLastAction {
    sessions: Arc<SessionStore>,
}

impl UndoLastAction {
    pub fn new(sessions: Arc<SessionStore>) -> Self {
        Self { sessions }
    }

    pub async fn execute(&self, game_id: GameId) -> Result<SessionUpdate, ScoringError> {
        let mut guard = lock_in_progress(&self.sessions, game_id).await?;
        let LiveGame { session, history } = &mut *guard;

        let update = history
            .undo(session)?
            .ok_or(ScoringError::NothingToUndo(game_id))?;

        tracing::info!(
            game_id = %game_id,
            inning = session.inning(),
            half = %session.half(),
            outs = session.outs(),
            remaining = history.undo_depth(),
            "Undid last action"
        );
        Ok(update)
    }
}

pub struct RedoLastAction {
    sessions: Arc<SessionStore>,
}

impl RedoLastAction {
    pub fn new(sessions: Arc<SessionStore>) -> Self {
        Self { sessions }
    }

    pub async fn execute(&self, game_id: GameId) -> Result<SessionUpdate, ScoringError> {
        let mut guard = lock_in_progress(&self.sessions, game_id).await?;
        let LiveGame { session, history } = &mut *guard;

        let update = history
            .redo(session)?
            .ok_or(ScoringError::NothingToRedo(game_id))?;

        tracing::info!(
            game_id = %game_id,
            inning = session.inning(),
            half = %session.half(),
            outs = session.outs(),
            remaining = history.redo_depth(),
            "Redid action"
        );
        Ok(update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::memory::InMemoryRepositories;
    use crate::infrastructure::ports::PlayerStatsRepo;
    use crate::use_cases::scoring::{RecordAtBat, RecordAtBatInput};
    use chrono::{NaiveDate, Utc};
    use scorebook_domain::{BattingResult, Game, GameSession, HomeAway, Lineup, OpponentName, PlayerId};

    struct Fixture {
        repos: InMemoryRepositories,
        sessions: Arc<SessionStore>,
        game_id: GameId,
        players: Vec<PlayerId>,
    }

    impl Fixture {
        fn new() -> Self {
            let sessions = Arc::new(SessionStore::new(10));
            let players: Vec<PlayerId> = (0..3).map(|_| PlayerId::new()).collect();
            let game = Game::new(
                OpponentName::new("Comets").unwrap(),
                NaiveDate::from_ymd_opt(2026, 7, 4).unwrap(),
                HomeAway::Away,
            );
            let game_id = game.id();
            let mut session = GameSession::new(game, Lineup::new(players.clone()).unwrap());
            session.start_game().unwrap();
            sessions.open(session);
            Self {
                repos: InMemoryRepositories::new(),
                sessions,
                game_id,
                players,
            }
        }

        async fn record(&self, batter: usize, result: BattingResult) {
            RecordAtBat::new(
                self.repos.at_bats.clone(),
                self.repos.player_stats.clone(),
                self.sessions.clone(),
                Arc::new(FixedClock(Utc::now())),
            )
            .execute(RecordAtBatInput::new(self.game_id, self.players[batter], result))
            .await
            .unwrap();
        }
    }

    #[tokio::test]
    async fn undo_restores_previous_bases_and_batter() {
        let fx = Fixture::new();
        fx.record(0, BattingResult::Single).await;
        fx.record(1, BattingResult::Double).await;

        UndoLastAction::new(fx.sessions.clone())
            .execute(fx.game_id)
            .await
            .unwrap();

        let live = fx.sessions.lock(fx.game_id).await.unwrap();
        assert_eq!(live.session.current_batter(), Some(fx.players[1]));
        assert_eq!(live.session.baserunners().first(), Some(fx.players[0]));
        assert!(live.history.can_redo());
    }

    #[tokio::test]
    async fn undo_leaves_persisted_statistics_alone() {
        let fx = Fixture::new();
        fx.record(0, BattingResult::HomeRun).await;

        UndoLastAction::new(fx.sessions.clone())
            .execute(fx.game_id)
            .await
            .unwrap();

        let stats = fx.repos.player_stats.get(fx.players[0]).await.unwrap().unwrap();
        assert_eq!(stats.home_runs(), 1);
        let live = fx.sessions.lock(fx.game_id).await.unwrap();
        assert_eq!(live.session.runs(), 0);
    }

    #[tokio::test]
    async fn redo_reapplies_undone_state() {
        let fx = Fixture::new();
        fx.record(0, BattingResult::Triple).await;

        let undo = UndoLastAction::new(fx.sessions.clone());
        let redo = RedoLastAction::new(fx.sessions.clone());
        undo.execute(fx.game_id).await.unwrap();
        redo.execute(fx.game_id).await.unwrap();

        let live = fx.sessions.lock(fx.game_id).await.unwrap();
        assert_eq!(live.session.baserunners().third(), Some(fx.players[0]));
        assert_eq!(live.session.current_batter(), Some(fx.players[1]));
        assert!(!live.history.can_redo());
    }

    #[tokio::test]
    async fn new_action_clears_redo() {
        let fx = Fixture::new();
        fx.record(0, BattingResult::Single).await;
        UndoLastAction::new(fx.sessions.clone())
            .execute(fx.game_id)
            .await
            .unwrap();

        fx.record(0, BattingResult::Walk).await;

        let result = RedoLastAction::new(fx.sessions.clone()).execute(fx.game_id).await;
        assert!(matches!(result, Err(ScoringError::NothingToRedo(_))));
    }

    #[tokio::test]
    async fn empty_history_returns_nothing_to_undo() {
        let fx = Fixture::new();
        let result = UndoLastAction::new(fx.sessions.clone()).execute(fx.game_id).await;
        assert!(matches!(result, Err(ScoringError::NothingToUndo(_))));
    }
}
