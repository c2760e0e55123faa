//! Scoring errors.

use crate::infrastructure::ports::RepoError;
use scorebook_domain::{DomainError, GameId, GameStatus, PlayerId};

/// Errors raised while scoring a live game.
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("No live session for game {0}")]
    SessionNotFound(GameId),
    #[error("Game {game_id} is {status}, not in progress")]
    GameNotInProgress { game_id: GameId, status: GameStatus },
    #[error("Player {actual} is not the current batter (expected {expected})")]
    WrongBatter { expected: PlayerId, actual: PlayerId },
    #[error("Nothing to undo for game {0}")]
    NothingToUndo(GameId),
    #[error("Nothing to redo for game {0}")]
    NothingToRedo(GameId),
    #[error("Validation error: {0}")]
    Validation(#[from] DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
