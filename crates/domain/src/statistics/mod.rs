//! Batting statistics: counters, derived rates, the per-at-bat aggregator,
//! and the consistency validator.

mod aggregator;
mod metrics;
mod team;
mod validator;

pub use aggregator::update_player_statistics;
pub use metrics::{ratio, round3, RateMetrics, StatCounters};
pub use team::TeamStatistics;
pub use validator::{validate_statistics, StatisticsViolation, MAX_SLUGGING};
