//! Batting order.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::PlayerId;

/// Ordered batting lineup. Batting positions are 1-based.
///
/// An empty lineup is representable so that a game can be set up before the
/// order is known; starting the game requires at least one batter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<PlayerId>", into = "Vec<PlayerId>")]
pub struct Lineup(Vec<PlayerId>);

impl Lineup {
    /// # Errors
    ///
    /// Returns `DomainError::Constraint` if a player is listed twice.
    pub fn new(players: impl IntoIterator<Item = PlayerId>) -> Result<Self, DomainError> {
        let players: Vec<PlayerId> = players.into_iter().collect();
        for (index, player) in players.iter().enumerate() {
            if players[..index].contains(player) {
                return Err(DomainError::constraint(format!(
                    "Player {} appears twice in the lineup",
                    player
                )));
            }
        }
        Ok(Self(players))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn players(&self) -> &[PlayerId] {
        &self.0
    }

    /// Player batting at zero-based `index`.
    pub fn player_at(&self, index: usize) -> Option<PlayerId> {
        self.0.get(index).copied()
    }

    /// 1-based batting position of `player`.
    pub fn batting_position(&self, player: PlayerId) -> Option<u8> {
        self.0
            .iter()
            .position(|p| *p == player)
            .and_then(|index| u8::try_from(index + 1).ok())
    }

    /// Index after `index`, wrapping to the top of the order.
    pub fn next_index(&self, index: usize) -> usize {
        if self.0.is_empty() {
            0
        } else {
            (index + 1) % self.0.len()
        }
    }
}

impl TryFrom<Vec<PlayerId>> for Lineup {
    type Error = DomainError;

    fn try_from(players: Vec<PlayerId>) -> Result<Self, Self::Error> {
        Self::new(players)
    }
}

impl From<Lineup> for Vec<PlayerId> {
    fn from(lineup: Lineup) -> Self {
        lineup.0
    }
}
