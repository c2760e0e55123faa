//! Scorebook Engine library.
//!
//! Orchestration around the scoring domain: persistence ports, in-memory
//! adapters, live session storage, and the use cases a scorer drives.
//!
//! ## Structure
//!
//! - `use_cases/` - Scorer story orchestration
//! - `stores/` - Live game sessions, one writer per game
//! - `infrastructure/` - Ports, adapters and configuration
//! - `scoresheet` - JSON scoresheet replay
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod scoresheet;
pub mod stores;
pub mod use_cases;

pub use app::App;
