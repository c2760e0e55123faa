//! Append-only at-bat storage.

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use scorebook_domain::{AtBat, AtBatId, GameId};

use crate::infrastructure::ports::{AtBatRepo, RepoError};

#[derive(Default)]
pub struct InMemoryAtBatRepo {
    at_bats: DashMap<AtBatId, AtBat>,
    // recording order per game
    by_game: DashMap<GameId, Vec<AtBatId>>,
}

impl InMemoryAtBatRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AtBatRepo for InMemoryAtBatRepo {
    async fn get(&self, id: AtBatId) -> Result<Option<AtBat>, RepoError> {
        Ok(self.at_bats.get(&id).map(|entry| entry.value().clone()))
    }

    async fn save(&self, at_bat: &AtBat) -> Result<(), RepoError> {
        match self.at_bats.entry(at_bat.id()) {
            Entry::Occupied(_) => Err(RepoError::constraint(format!(
                "At-bat {} is already recorded",
                at_bat.id()
            ))),
            Entry::Vacant(slot) => {
                slot.insert(at_bat.clone());
                self.by_game
                    .entry(at_bat.game_id())
                    .or_default()
                    .push(at_bat.id());
                Ok(())
            }
        }
    }

    async fn list_for_game(&self, game_id: GameId) -> Result<Vec<AtBat>, RepoError> {
        let Some(ids) = self.by_game.get(&game_id).map(|entry| entry.value().clone()) else {
            return Ok(Vec::new());
        };
        ids.into_iter()
            .map(|id| {
                self.at_bats
                    .get(&id)
                    .map(|entry| entry.value().clone())
                    .ok_or_else(|| RepoError::not_found("AtBat", id))
            })
            .collect()
    }
}
