//! Game lifecycle errors.

use crate::infrastructure::ports::RepoError;
use scorebook_domain::{DomainError, GameId};

/// Errors that can occur while opening or changing the status of a game.
#[derive(Debug, thiserror::Error)]
pub enum LifecycleError {
    #[error("No live session for game {0}")]
    SessionNotFound(GameId),
    #[error("Game {0} already has a live session")]
    AlreadyOpen(GameId),
    #[error("Validation error: {0}")]
    Validation(#[from] DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
