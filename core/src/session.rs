// SPDX-License-Identifier: MIT OR Apache-2.0

//! Keyed store of live game sessions
//!
//! The engine is single-threaded and assumes at most one in-flight
//! mutating call per game; this store is the collaborator that serializes
//! access. Resetting a game replaces the stored instance with a fresh one
//! rather than mutating the old one, so a reset is always observable.

use crate::GameState;
use parking_lot::RwLock;
use std::collections::HashMap;
use uuid::Uuid;

/// Identifier for one game session
pub type GameId = Uuid;

/// Thread-safe map of game id to game state
#[derive(Debug, Default)]
pub struct GameStore {
    games: RwLock<HashMap<GameId, GameState>>,
}

impl GameStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new game and return its id
    pub fn create(&self, board_size: u8) -> GameId {
        let id = Uuid::new_v4();
        self.games.write().insert(id, GameState::new(board_size));
        tracing::info!(%id, board_size, "created game session");
        id
    }

    /// A snapshot of the game's current state
    pub fn get(&self, id: &GameId) -> Option<GameState> {
        self.games.read().get(id).cloned()
    }

    /// Run `f` against the stored game while holding the write lock
    pub fn with_game<T>(&self, id: &GameId, f: impl FnOnce(&mut GameState) -> T) -> Option<T> {
        self.games.write().get_mut(id).map(f)
    }

    /// Replace the stored game with a fresh one of the given size.
    /// Returns false when the id is unknown.
    pub fn reset(&self, id: &GameId, board_size: u8) -> bool {
        let mut games = self.games.write();
        if !games.contains_key(id) {
            return false;
        }
        games.insert(*id, GameState::new(board_size));
        tracing::info!(%id, board_size, "reset game session");
        true
    }

    /// Drop a session, returning its final state
    pub fn remove(&self, id: &GameId) -> Option<GameState> {
        self.games.write().remove(id)
    }

    pub fn len(&self) -> usize {
        self.games.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_and_get() {
        let store = GameStore::new();
        let id = store.create(9);

        let game = store.get(&id).unwrap();
        assert_eq!(game.board_size, 9);
        assert!(game.moves.is_empty());
        assert!(store.get(&Uuid::new_v4()).is_none());
    }

    #[test]
    fn reset_replaces_the_stored_game() {
        let store = GameStore::new();
        let id = store.create(9);

        store
            .with_game(&id, |game| game.place_stone(4, 4))
            .unwrap()
            .unwrap();
        assert_eq!(store.get(&id).unwrap().moves.len(), 1);

        assert!(store.reset(&id, 9));
        assert!(store.get(&id).unwrap().moves.is_empty());

        assert!(!store.reset(&Uuid::new_v4(), 9));
    }

    #[test]
    fn remove_returns_final_state() {
        let store = GameStore::new();
        let id = store.create(13);

        let game = store.remove(&id).unwrap();
        assert_eq!(game.board_size, 13);
        assert!(store.is_empty());
    }
}
