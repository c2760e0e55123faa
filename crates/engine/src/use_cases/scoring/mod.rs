//! Scoring use cases: at-bats, pitches, manual adjustments, undo and redo.

use std::sync::Arc;

use scorebook_domain::{GameId, GameStatus};
use tokio::sync::OwnedMutexGuard;

use crate::stores::{LiveGame, SessionStore};

mod adjust;
mod error;
mod record_at_bat;
mod record_pitch;
mod types;
mod undo;

pub use adjust::{AdjustSession, AdjustmentOutcome};
pub use error::ScoringError;
pub use record_at_bat::RecordAtBat;
pub use record_pitch::RecordPitch;
pub use types::{RecordAtBatInput, RecordAtBatResult, SessionAdjustment};
pub use undo::{RedoLastAction, UndoLastAction};

/// Lock a game's session, requiring it to be in progress.
async fn lock_in_progress(
    sessions: &SessionStore,
    game_id: GameId,
) -> Result<OwnedMutexGuard<LiveGame>, ScoringError> {
    let live = sessions
        .lock(game_id)
        .await
        .ok_or(ScoringError::SessionNotFound(game_id))?;

    let status = live.session.status();
    if status != GameStatus::InProgress {
        tracing::warn!(game_id = %game_id, status = %status, "Rejected scoring on a game not in progress");
        return Err(ScoringError::GameNotInProgress { game_id, status });
    }
    Ok(live)
}

/// Container for scoring use cases.
pub struct ScoringUseCases {
    pub record_at_bat: Arc<RecordAtBat>,
    pub record_pitch: Arc<RecordPitch>,
    pub adjust: Arc<AdjustSession>,
    pub undo: Arc<UndoLastAction>,
    pub redo: Arc<RedoLastAction>,
}

impl ScoringUseCases {
    pub fn new(
        record_at_bat: Arc<RecordAtBat>,
        record_pitch: Arc<RecordPitch>,
        adjust: Arc<AdjustSession>,
        undo: Arc<UndoLastAction>,
        redo: Arc<RedoLastAction>,
    ) -> Self {
        Self {
            record_at_bat,
            record_pitch,
            adjust,
            undo,
            redo,
        }
    }
}
