//! Game lifecycle use cases: open a game, then move it through
//! setup, in progress, suspended and completed.

use std::sync::Arc;

mod error;
mod open_game;
mod transitions;

pub use error::LifecycleError;
pub use open_game::{OpenGame, OpenGameInput};
pub use transitions::{CompleteGame, ResumeGame, StartGame, SuspendGame};

/// Container for lifecycle use cases.
pub struct LifecycleUseCases {
    pub open: Arc<OpenGame>,
    pub start: Arc<StartGame>,
    pub suspend: Arc<SuspendGame>,
    pub resume: Arc<ResumeGame>,
    pub complete: Arc<CompleteGame>,
}

impl LifecycleUseCases {
    pub fn new(
        open: Arc<OpenGame>,
        start: Arc<StartGame>,
        suspend: Arc<SuspendGame>,
        resume: Arc<ResumeGame>,
        complete: Arc<CompleteGame>,
    ) -> Self {
        Self {
            open,
            start,
            suspend,
            resume,
            complete,
        }
    }
}
