//! In-memory state storage.
//!
//! - `SessionStore` - live game sessions with their undo history

pub mod session;

pub use session::{LiveGame, SessionStore};
