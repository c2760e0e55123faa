//! Aggregate roots - domain objects that own their related data
//!
//! Mutations return update enums from [`crate::events`] instead of
//! publishing them.

mod game_session;
mod session_history;

pub use game_session::{AtBatInput, GameSession, SessionSnapshot, OUTS_PER_HALF_INNING};
pub use session_history::{SessionHistory, DEFAULT_UNDO_DEPTH};
