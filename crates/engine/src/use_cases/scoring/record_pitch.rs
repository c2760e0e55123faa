//! Record pitch use case.

use std::sync::Arc;

use scorebook_domain::{GameId, Pitch, SessionUpdate};

use crate::stores::SessionStore;

use super::error::ScoringError;
use super::lock_in_progress;

/// Appends one pitch to the current plate appearance. Undoable.
pub struct RecordPitch {
    sessions: Arc<SessionStore>,
}

impl RecordPitch {
    pub fn new(sessions: Arc<SessionStore>) -> Self {
        Self { sessions }
    }

    pub async fn execute(&self, game_id: GameId, pitch: Pitch) -> Result<SessionUpdate, ScoringError> {
        let mut live = lock_in_progress(&self.sessions, game_id).await?;

        let snapshot = live.session.snapshot();
        let update = live.session.record_pitch(pitch)?;
        live.history.record(snapshot);

        tracing::debug!(
            game_id = %game_id,
            pitch = %pitch,
            count = %live.session.count(),
            "Recorded pitch"
        );
        Ok(update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use scorebook_domain::{Count, Game, GameSession, HomeAway, Lineup, OpponentName, PlayerId};

    fn started(sessions: &SessionStore) -> GameId {
        let game = Game::new(
            OpponentName::new("Hornets").unwrap(),
            NaiveDate::from_ymd_opt(2026, 6, 6).unwrap(),
            HomeAway::Away,
        );
        let game_id = game.id();
        let mut session = GameSession::new(game, Lineup::new([PlayerId::new()]).unwrap());
        session.start_game().unwrap();
        sessions.open(session);
        game_id
    }

    #[tokio::test]
    async fn pitches_build_the_count() {
        let sessions = Arc::new(SessionStore::new(10));
        let game_id = started(&sessions);
        let record = RecordPitch::new(sessions.clone());

        for pitch in [Pitch::Ball, Pitch::CalledStrike, Pitch::Foul] {
            record.execute(game_id, pitch).await.unwrap();
        }
        let update = record.execute(game_id, Pitch::Foul).await.unwrap();

        assert_eq!(
            update,
            SessionUpdate::PitchRecorded {
                pitch: Pitch::Foul,
                count: Count::new(1, 2).unwrap(),
                plate_appearance_over: false,
            }
        );
        let live = sessions.lock(game_id).await.unwrap();
        assert_eq!(live.session.pitches().len(), 4);
        assert_eq!(live.history.undo_depth(), 4);
    }

    #[tokio::test]
    async fn strike_three_is_reported_not_recorded() {
        let sessions = Arc::new(SessionStore::new(10));
        let game_id = started(&sessions);
        let record = RecordPitch::new(sessions.clone());

        record.execute(game_id, Pitch::SwingingStrike).await.unwrap();
        record.execute(game_id, Pitch::SwingingStrike).await.unwrap();
        let update = record.execute(game_id, Pitch::CalledStrike).await.unwrap();

        assert!(matches!(
            update,
            SessionUpdate::PitchRecorded {
                plate_appearance_over: true,
                ..
            }
        ));
        let live = sessions.lock(game_id).await.unwrap();
        assert_eq!(live.session.outs(), 0);
    }

    #[tokio::test]
    async fn pitch_after_terminal_count_is_rejected_without_history() {
        let sessions = Arc::new(SessionStore::new(10));
        let game_id = started(&sessions);
        let record = RecordPitch::new(sessions.clone());

        for _ in 0..4 {
            record.execute(game_id, Pitch::Ball).await.unwrap();
        }
        let result = record.execute(game_id, Pitch::Ball).await;

        assert!(matches!(result, Err(ScoringError::Validation(_))));
        let live = sessions.lock(game_id).await.unwrap();
        assert_eq!(live.history.undo_depth(), 4);
    }
}
