//! Derived rate metrics, rounded to three decimal places.

use serde::{Deserialize, Serialize};

/// Raw counters from which every rate metric is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatCounters {
    pub games: u32,
    pub at_bats: u32,
    pub hits: u32,
    pub runs: u32,
    pub rbis: u32,
    pub singles: u32,
    pub doubles: u32,
    pub triples: u32,
    pub home_runs: u32,
    pub walks: u32,
    pub strikeouts: u32,
    #[serde(default)]
    pub sacrifice_flies: u32,
}

impl StatCounters {
    /// Bases credited on hits.
    pub fn total_bases(&self) -> u32 {
        self.singles + 2 * self.doubles + 3 * self.triples + 4 * self.home_runs
    }

    /// Counter-wise sum, used to roll players up into a team line.
    pub fn combined(&self, other: &StatCounters) -> StatCounters {
        StatCounters {
            games: self.games.max(other.games),
            at_bats: self.at_bats + other.at_bats,
            hits: self.hits + other.hits,
            runs: self.runs + other.runs,
            rbis: self.rbis + other.rbis,
            singles: self.singles + other.singles,
            doubles: self.doubles + other.doubles,
            triples: self.triples + other.triples,
            home_runs: self.home_runs + other.home_runs,
            walks: self.walks + other.walks,
            strikeouts: self.strikeouts + other.strikeouts,
            sacrifice_flies: self.sacrifice_flies + other.sacrifice_flies,
        }
    }
}

/// Rate metrics computed from a [`StatCounters`] value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateMetrics {
    pub batting_average: f64,
    pub on_base_percentage: f64,
    pub slugging_percentage: f64,
    pub ops: f64,
}

impl RateMetrics {
    pub fn from_counters(counters: &StatCounters) -> Self {
        let batting_average = ratio(counters.hits, counters.at_bats);
        let on_base_percentage = ratio(
            counters.hits + counters.walks,
            counters.at_bats + counters.walks + counters.sacrifice_flies,
        );
        let slugging_percentage = ratio(counters.total_bases(), counters.at_bats);
        Self {
            batting_average,
            on_base_percentage,
            slugging_percentage,
            ops: round3(on_base_percentage + slugging_percentage),
        }
    }
}

/// `numerator / denominator` rounded to three places; zero when the denominator is zero.
pub fn ratio(numerator: u32, denominator: u32) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    round3(f64::from(numerator) / f64::from(denominator))
}

pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_handles_zero_denominator() {
        assert_eq!(ratio(3, 0), 0.0);
    }

    #[test]
    fn ratio_rounds_to_three_places() {
        assert_eq!(ratio(1, 3), 0.333);
        assert_eq!(ratio(2, 3), 0.667);
    }

    #[test]
    fn metrics_from_counters() {
        let counters = StatCounters {
            at_bats: 10,
            hits: 4,
            singles: 2,
            doubles: 1,
            home_runs: 1,
            walks: 2,
            sacrifice_flies: 1,
            ..StatCounters::default()
        };
        let metrics = RateMetrics::from_counters(&counters);

        assert_eq!(metrics.batting_average, 0.4);
        // (4 + 2) / (10 + 2 + 1)
        assert_eq!(metrics.on_base_percentage, 0.462);
        // (2 + 2 + 4) / 10
        assert_eq!(metrics.slugging_percentage, 0.8);
        assert_eq!(metrics.ops, 1.262);
    }
}
