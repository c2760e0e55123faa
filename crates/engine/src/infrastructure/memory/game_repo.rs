//! Game storage.

use async_trait::async_trait;
use dashmap::DashMap;
use scorebook_domain::{Game, GameId};

use crate::infrastructure::ports::{GameRepo, RepoError};

#[derive(Default)]
pub struct InMemoryGameRepo {
    games: DashMap<GameId, Game>,
}

impl InMemoryGameRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GameRepo for InMemoryGameRepo {
    async fn get(&self, id: GameId) -> Result<Option<Game>, RepoError> {
        Ok(self.games.get(&id).map(|entry| entry.value().clone()))
    }

    async fn save(&self, game: &Game) -> Result<(), RepoError> {
        self.games.insert(game.id(), game.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Game>, RepoError> {
        let mut games: Vec<Game> = self.games.iter().map(|entry| entry.value().clone()).collect();
        games.sort_by_key(|game| (game.date(), game.id()));
        Ok(games)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use scorebook_domain::{GameStatus, HomeAway, OpponentName};

    fn game(day: u32) -> Game {
        Game::new(
            OpponentName::new("Hornets").unwrap(),
            NaiveDate::from_ymd_opt(2026, 4, day).unwrap(),
            HomeAway::Home,
        )
    }

    #[tokio::test]
    async fn save_replaces_by_id() {
        let repo = InMemoryGameRepo::new();
        let setup = game(1);
        repo.save(&setup).await.unwrap();
        repo.save(&setup.start().unwrap()).await.unwrap();

        let stored = repo.get(setup.id()).await.unwrap().unwrap();
        assert_eq!(stored.status(), GameStatus::InProgress);
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn list_is_ordered_by_date() {
        let repo = InMemoryGameRepo::new();
        let (later, earlier) = (game(20), game(3));
        repo.save(&later).await.unwrap();
        repo.save(&earlier).await.unwrap();

        let ids: Vec<GameId> = repo.list().await.unwrap().iter().map(Game::id).collect();
        assert_eq!(ids, vec![earlier.id(), later.id()]);
    }

    #[tokio::test]
    async fn missing_game_is_none() {
        let repo = InMemoryGameRepo::new();
        assert!(repo.get(GameId::new()).await.unwrap().is_none());
    }
}
