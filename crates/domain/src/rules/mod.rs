//! Pure scoring rules: baserunner advancement and RBI attribution.
//!
//! Both calculators are deterministic functions of their inputs with no hidden
//! state. The game session composes them when an at-bat is recorded.

pub mod advancement;
pub mod rbi;

pub use advancement::{advance, advance_with, Advancement, AdvancementOutcome, ManualAdvancement};
pub use rbi::{calculate_rbis, RbiCredit, MAX_RBIS_PER_AT_BAT};
