//! Session snapshots persisted through a key-value store.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::deck::Deck;
use crate::error::SessionError;

/// Key under which the snapshot is stored.
pub const STORAGE_NAME: &str = "blackjack-rpg";

/// A player seated at the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Whether the player takes part in the next round.
    pub enabled: bool,
    /// The `uuid` of the group the player belongs to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_group: Option<String>,
    /// Display name.
    pub name: String,
    /// Unique identifier.
    pub uuid: String,
}

/// A named group of players.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerGroup {
    /// Display name.
    pub name: String,
    /// Unique identifier.
    pub uuid: String,
}

/// Persisted game state. Absent fields have never been saved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// The deck cards are drawn from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draw_deck: Option<Deck>,
    /// Players at the table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub players: Option<Vec<Player>>,
}

impl Snapshot {
    /// Overwrites every field that is present in `patch`.
    pub fn merge(&mut self, patch: Self) {
        if patch.draw_deck.is_some() {
            self.draw_deck = patch.draw_deck;
        }
        if patch.players.is_some() {
            self.players = patch.players;
        }
    }
}

/// String key-value storage, such as browser local storage.
pub trait KeyValueStore {
    /// Reads the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] if the store cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, SessionError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] if the store cannot be written.
    fn set_item(&mut self, key: &str, value: String) -> Result<(), SessionError>;
}

/// In-memory [`KeyValueStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: String) -> Result<(), SessionError> {
        self.items.insert(key.to_string(), value);
        Ok(())
    }
}

/// A handle to the persisted snapshot and its in-memory mirror.
#[derive(Debug)]
pub struct Session<S> {
    store: S,
    state: Snapshot,
}

impl<S: KeyValueStore> Session<S> {
    /// Creates a session over `store`. Nothing is read until [`Session::load`].
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store,
            state: Snapshot::default(),
        }
    }

    /// Reads the stored snapshot, replacing the in-memory state.
    ///
    /// A missing entry yields an empty snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or the stored value is not
    /// a valid snapshot.
    pub fn load(&mut self) -> Result<&Snapshot, SessionError> {
        self.state = match self.store.get_item(STORAGE_NAME)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|err| {
                log::warn!("discarding unreadable session snapshot: {err}");
                SessionError::Decode
            })?,
            None => Snapshot::default(),
        };

        log::debug!("loaded session snapshot from {STORAGE_NAME}");
        Ok(&self.state)
    }

    /// Merges `patch` into the current state and writes the result.
    ///
    /// The in-memory state is only updated once the write succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be encoded or written.
    pub fn save(&mut self, patch: Snapshot) -> Result<&Snapshot, SessionError> {
        let mut next = self.state.clone();
        next.merge(patch);

        let raw = serde_json::to_string(&next).map_err(|err| {
            log::warn!("failed to encode session snapshot: {err}");
            SessionError::Encode
        })?;
        self.store.set_item(STORAGE_NAME, raw)?;

        self.state = next;
        log::debug!("saved session snapshot to {STORAGE_NAME}");
        Ok(&self.state)
    }

    /// Returns the in-memory state.
    #[must_use]
    pub const fn state(&self) -> &Snapshot {
        &self.state
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the session and returns the underlying store.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }
}
