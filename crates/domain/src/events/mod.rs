//! Domain events
//!
//! Mutations on the [`GameSession`](crate::aggregates::GameSession) aggregate
//! return these values instead of publishing them, so callers decide what to
//! log or persist.

mod session_events;

pub use session_events::{AtBatOutcome, SessionUpdate};
