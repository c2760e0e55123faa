//! Value objects - immutable, validated building blocks of the scoring domain

mod base;
mod baserunner_state;
mod batting_result;
mod count;
mod inning;
mod lineup;
mod names;
mod scoreboard;

pub use base::{Base, BatterAdvance};
pub use baserunner_state::BaserunnerState;
pub use batting_result::BattingResult;
pub use count::{Count, Pitch, BALLS_FOR_WALK, STRIKES_FOR_STRIKEOUT};
pub use inning::HalfInning;
pub use lineup::Lineup;
pub use names::OpponentName;
pub use scoreboard::{FinalScore, HalfInningRuns, LineScore};
