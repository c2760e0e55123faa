//! Team batting line rolled up from player lines.

use serde::{Deserialize, Serialize};

use crate::entities::PlayerStatistics;
use crate::statistics::{RateMetrics, StatCounters};

/// Sum of every player's counters with team-level rates.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStatistics {
    pub counters: StatCounters,
    pub metrics: RateMetrics,
}

impl TeamStatistics {
    pub fn from_players<'a>(players: impl IntoIterator<Item = &'a PlayerStatistics>) -> Self {
        let counters = players
            .into_iter()
            .fold(StatCounters::default(), |acc, player| {
                acc.combined(player.counters())
            });
        Self {
            metrics: RateMetrics::from_counters(&counters),
            counters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::PlayerId;

    #[test]
    fn sums_player_counters() {
        let a = PlayerStatistics::new(PlayerId::new()).with_counters(|c| {
            c.games = 3;
            c.at_bats = 6;
            c.hits = 3;
            c.singles = 3;
        });
        let b = PlayerStatistics::new(PlayerId::new()).with_counters(|c| {
            c.games = 2;
            c.at_bats = 4;
            c.hits = 1;
            c.doubles = 1;
        });

        let team = TeamStatistics::from_players([&a, &b]);

        assert_eq!(team.counters.at_bats, 10);
        assert_eq!(team.counters.hits, 4);
        assert_eq!(team.counters.games, 3);
        assert_eq!(team.metrics.batting_average, 0.4);
        assert_eq!(team.metrics.slugging_percentage, 0.5);
    }

    #[test]
    fn empty_team_is_zero() {
        let team = TeamStatistics::from_players(std::iter::empty());
        assert_eq!(team.metrics.batting_average, 0.0);
    }
}
