//! Domain entities - records with identity

mod at_bat;
mod game;
mod player_statistics;

pub use at_bat::{AtBat, AtBatDraft};
pub use game::{Game, GameStatus, HomeAway};
pub use player_statistics::PlayerStatistics;
