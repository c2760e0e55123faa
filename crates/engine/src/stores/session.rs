//! Live game session storage.
//!
//! One [`LiveGame`] per game, each behind its own `tokio::sync::Mutex`, so a
//! game has exactly one writer at a time while different games proceed
//! independently.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use scorebook_domain::{GameId, GameSession, SessionHistory};
use tokio::sync::{Mutex, OwnedMutexGuard};

/// A session with its undo history.
#[derive(Debug)]
pub struct LiveGame {
    pub session: GameSession,
    pub history: SessionHistory,
}

/// Session store for use cases.
pub struct SessionStore {
    games: DashMap<GameId, Arc<Mutex<LiveGame>>>,
    undo_depth: usize,
}

impl SessionStore {
    pub fn new(undo_depth: usize) -> Self {
        Self {
            games: DashMap::new(),
            undo_depth,
        }
    }

    /// Register a session. Returns `false` if the game already has one.
    pub fn open(&self, session: GameSession) -> bool {
        match self.games.entry(session.game().id()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(Mutex::new(LiveGame {
                    session,
                    history: SessionHistory::new(self.undo_depth),
                })));
                true
            }
        }
    }

    /// Exclusive access to a game's session, waiting for any other writer.
    pub async fn lock(&self, game_id: GameId) -> Option<OwnedMutexGuard<LiveGame>> {
        // Clone the Arc out so no map shard lock is held across the await.
        let live = self.games.get(&game_id).map(|entry| Arc::clone(entry.value()))?;
        Some(live.lock_owned().await)
    }

    pub fn close(&self, game_id: GameId) -> bool {
        self.games.remove(&game_id).is_some()
    }

    pub fn contains(&self, game_id: GameId) -> bool {
        self.games.contains_key(&game_id)
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use scorebook_domain::{Game, HomeAway, Lineup, OpponentName, PlayerId};

    fn session() -> GameSession {
        let game = Game::new(
            OpponentName::new("Owls").unwrap(),
            NaiveDate::from_ymd_opt(2026, 8, 9).unwrap(),
            HomeAway::Away,
        );
        GameSession::new(game, Lineup::new([PlayerId::new()]).unwrap())
    }

    #[tokio::test]
    async fn open_once_per_game() {
        let store = SessionStore::new(5);
        let session = session();
        let game_id = session.game().id();

        assert!(store.open(session.clone()));
        assert!(!store.open(session));
        assert_eq!(store.len(), 1);

        let live = store.lock(game_id).await.unwrap();
        assert_eq!(live.history.capacity(), 5);
    }

    #[tokio::test]
    async fn writers_are_serialized() {
        let store = Arc::new(SessionStore::new(5));
        let session = session();
        let game_id = session.game().id();
        store.open(session);

        let mut first = store.lock(game_id).await.unwrap();
        first.session.start_game().unwrap();

        let contender = {
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                let live = store.lock(game_id).await.unwrap();
                live.session.status()
            })
        };
        tokio::task::yield_now().await;
        assert!(!contender.is_finished());

        drop(first);
        let seen = contender.await.unwrap();
        assert_eq!(seen, scorebook_domain::GameStatus::InProgress);
    }

    #[tokio::test]
    async fn unknown_or_closed_game_has_no_session() {
        let store = SessionStore::new(5);
        assert!(store.lock(GameId::new()).await.is_none());

        let session = session();
        let game_id = session.game().id();
        store.open(session);
        assert!(store.close(game_id));
        assert!(!store.contains(game_id));
    }
}
