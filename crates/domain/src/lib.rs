//! Scorebook domain: the live-scoring rule engine for softball and baseball.
//!
//! Pure and synchronous. Nothing here performs I/O or logs; the engine crate
//! persists what these types produce.
//!
//! - [`rules`]: baserunner advancement and RBI attribution
//! - [`aggregates`]: the `GameSession` state machine and its undo history
//! - [`statistics`]: per-player counters, derived rates and their validator

extern crate self as scorebook_domain;

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod events;
pub mod ids;
pub mod rules;
pub mod statistics;
pub mod value_objects;

pub use aggregates::{
    AtBatInput, GameSession, SessionHistory, SessionSnapshot, DEFAULT_UNDO_DEPTH,
    OUTS_PER_HALF_INNING,
};
pub use entities::{AtBat, AtBatDraft, Game, GameStatus, HomeAway, PlayerStatistics};
pub use error::DomainError;
pub use events::{AtBatOutcome, SessionUpdate};
pub use ids::{AtBatId, GameId, InningId, PlayerId};
pub use rules::{
    advance, advance_with, calculate_rbis, Advancement, AdvancementOutcome, ManualAdvancement,
    RbiCredit, MAX_RBIS_PER_AT_BAT,
};
pub use statistics::{
    update_player_statistics, validate_statistics, RateMetrics, StatCounters, StatisticsViolation,
    TeamStatistics,
};
pub use value_objects::{
    Base, BaserunnerState, BatterAdvance, BattingResult, Count, FinalScore, HalfInning,
    HalfInningRuns, LineScore, Lineup, OpponentName, Pitch, BALLS_FOR_WALK,
    STRIKES_FOR_STRIKEOUT,
};
