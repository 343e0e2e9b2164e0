//! In-memory registry of live game sessions keyed by join code.
//!
//! Backed by a sharded concurrent map. Every mutation runs while holding the
//! entry's write guard, so concurrent joins or turns on one game serialize
//! and never overwrite each other. Entries are never evicted.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::domain::Game;

#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    games: Arc<DashMap<String, Game>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `game` under its own code unless that code is already taken.
    ///
    /// Returns the rejected game when the code is occupied.
    pub fn insert_new(&self, game: Game) -> Result<(), Game> {
        match self.games.entry(game.code.clone()) {
            Entry::Occupied(_) => Err(game),
            Entry::Vacant(slot) => {
                slot.insert(game);
                Ok(())
            }
        }
    }

    /// Snapshot of the game stored under `code`.
    pub fn get(&self, code: &str) -> Option<Game> {
        self.games.get(code).map(|game| game.value().clone())
    }

    /// Mutate the game under `code` in place and return `f`'s result.
    pub fn update<R>(&self, code: &str, f: impl FnOnce(&mut Game) -> R) -> Option<R> {
        self.games.get_mut(code).map(|mut game| f(game.value_mut()))
    }

    pub fn contains(&self, code: &str) -> bool {
        self.games.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}
