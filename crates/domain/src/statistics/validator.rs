//! Post-hoc consistency checks for a batting line.

use thiserror::Error;

use crate::entities::PlayerStatistics;

/// Highest possible slugging percentage (a home run every at-bat).
pub const MAX_SLUGGING: f64 = 4.0;

/// A broken statistics invariant.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatisticsViolation {
    #[error("Hits ({hits}) exceed at-bats ({at_bats})")]
    HitsExceedAtBats { hits: u32, at_bats: u32 },

    #[error("Hit types sum to {hit_types} but hits is {hits}")]
    HitTypesMismatch { hit_types: u32, hits: u32 },

    #[error("Batting average {0:.3} is above 1.000")]
    BattingAverageOutOfRange(f64),

    #[error("Slugging percentage {0:.3} is above 4.000")]
    SluggingOutOfRange(f64),
}

/// Returns every violated invariant; empty when the line is consistent.
pub fn validate_statistics(stats: &PlayerStatistics) -> Vec<StatisticsViolation> {
    let counters = stats.counters();
    let mut violations = Vec::new();

    if counters.hits > counters.at_bats {
        violations.push(StatisticsViolation::HitsExceedAtBats {
            hits: counters.hits,
            at_bats: counters.at_bats,
        });
    }

    let hit_types = counters.singles + counters.doubles + counters.triples + counters.home_runs;
    if hit_types != counters.hits {
        violations.push(StatisticsViolation::HitTypesMismatch {
            hit_types,
            hits: counters.hits,
        });
    }

    if !(0.0..=1.0).contains(&stats.batting_average()) {
        violations.push(StatisticsViolation::BattingAverageOutOfRange(
            stats.batting_average(),
        ));
    }

    if !(0.0..=MAX_SLUGGING).contains(&stats.slugging_percentage()) {
        violations.push(StatisticsViolation::SluggingOutOfRange(
            stats.slugging_percentage(),
        ));
    }

    violations
}
