//! PlayerStatistics - cumulative batting line for one player
//!
//! Rate metrics are never stored on their own: every constructor and every
//! update recomputes them from the counters, so they cannot drift.

use serde::{Deserialize, Serialize};

use crate::ids::PlayerId;
use crate::statistics::{RateMetrics, StatCounters};

/// Batting counters and derived rates for one player.
///
/// # Example
///
/// ```
/// use scorebook_domain::{PlayerId, PlayerStatistics, StatCounters};
///
/// let stats = PlayerStatistics::from_counters(
///     PlayerId::new(),
///     StatCounters { at_bats: 4, hits: 1, singles: 1, ..StatCounters::default() },
/// );
///
/// assert_eq!(stats.batting_average(), 0.25);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PlayerStatisticsWireFormat", into = "PlayerStatisticsWireFormat")]
pub struct PlayerStatistics {
    player_id: PlayerId,
    counters: StatCounters,
    metrics: RateMetrics,
}

impl PlayerStatistics {
    /// Empty batting line.
    pub fn new(player_id: PlayerId) -> Self {
        Self::from_counters(player_id, StatCounters::default())
    }

    /// Build from stored counters, deriving every rate.
    pub fn from_counters(player_id: PlayerId, counters: StatCounters) -> Self {
        Self {
            player_id,
            metrics: RateMetrics::from_counters(&counters),
            counters,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn player_id(&self) -> PlayerId {
        self.player_id
    }

    #[inline]
    pub fn counters(&self) -> &StatCounters {
        &self.counters
    }

    #[inline]
    pub fn metrics(&self) -> &RateMetrics {
        &self.metrics
    }

    pub fn games(&self) -> u32 {
        self.counters.games
    }

    pub fn at_bats(&self) -> u32 {
        self.counters.at_bats
    }

    pub fn hits(&self) -> u32 {
        self.counters.hits
    }

    pub fn runs(&self) -> u32 {
        self.counters.runs
    }

    pub fn rbis(&self) -> u32 {
        self.counters.rbis
    }

    pub fn walks(&self) -> u32 {
        self.counters.walks
    }

    pub fn strikeouts(&self) -> u32 {
        self.counters.strikeouts
    }

    pub fn home_runs(&self) -> u32 {
        self.counters.home_runs
    }

    pub fn batting_average(&self) -> f64 {
        self.metrics.batting_average
    }

    pub fn on_base_percentage(&self) -> f64 {
        self.metrics.on_base_percentage
    }

    pub fn slugging_percentage(&self) -> f64 {
        self.metrics.slugging_percentage
    }

    pub fn ops(&self) -> f64 {
        self.metrics.ops
    }

    // =========================================================================
    // Updates (each returns a new value)
    // =========================================================================

    /// Returns a copy with `update` applied to the counters and every rate recomputed.
    pub fn with_counters(&self, update: impl FnOnce(&mut StatCounters)) -> Self {
        let mut counters = self.counters;
        update(&mut counters);
        Self::from_counters(self.player_id, counters)
    }

    /// Credit an appearance in one more game.
    pub fn record_game_played(&self) -> Self {
        self.with_counters(|c| c.games += 1)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayerStatisticsWireFormat {
    player_id: PlayerId,
    #[serde(flatten)]
    counters: StatCounters,
    // Written for consumers; recomputed on read.
    #[serde(default, skip_deserializing)]
    batting_average: f64,
    #[serde(default, skip_deserializing)]
    on_base_percentage: f64,
    #[serde(default, skip_deserializing)]
    slugging_percentage: f64,
    #[serde(default, skip_deserializing)]
    ops: f64,
}

impl From<PlayerStatisticsWireFormat> for PlayerStatistics {
    fn from(wire: PlayerStatisticsWireFormat) -> Self {
        Self::from_counters(wire.player_id, wire.counters)
    }
}

impl From<PlayerStatistics> for PlayerStatisticsWireFormat {
    fn from(stats: PlayerStatistics) -> Self {
        Self {
            player_id: stats.player_id,
            counters: stats.counters,
            batting_average: stats.metrics.batting_average,
            on_base_percentage: stats.metrics.on_base_percentage,
            slugging_percentage: stats.metrics.slugging_percentage,
            ops: stats.metrics.ops,
        }
    }
}
