//! Durable key/value storage for the persisted session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser build backs this with `localStorage`, the CLI with a JSON file.
//! Only the session store writes these keys; everything else reads session
//! state from the store.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::StorageError;

/// Key holding the raw bearer token.
pub const TOKEN_KEY: &str = "access_token";
/// Key holding the JSON-serialized identity.
pub const USER_KEY: &str = "user";

/// String-valued durable storage.
///
/// Reads are best-effort: an unreadable entry is reported as absent, which
/// restoration treats as "no session".
pub trait SessionStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend fails to delete the entry.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Raw persisted entries, before any decoding.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct PersistedEntries {
    pub token: Option<String>,
    pub user: Option<String>,
}

pub(crate) fn read_entries(storage: &dyn SessionStorage) -> PersistedEntries {
    PersistedEntries { token: storage.get_item(TOKEN_KEY), user: storage.get_item(USER_KEY) }
}

/// Write both entries; on failure, remove whatever was written.
pub(crate) fn write_entries(storage: &dyn SessionStorage, token: &str, user_json: &str) -> Result<(), StorageError> {
    let result = storage
        .set_item(TOKEN_KEY, token)
        .and_then(|()| storage.set_item(USER_KEY, user_json));
    if result.is_err() {
        clear_entries(storage);
    }
    result
}

/// Remove both entries, logging (not propagating) failures.
pub(crate) fn clear_entries(storage: &dyn SessionStorage) {
    for key in [TOKEN_KEY, USER_KEY] {
        if let Err(e) = storage.remove_item(key) {
            tracing::warn!(key, error = %e, "failed to clear persisted session entry");
        }
    }
}

/// Process-local storage used by tests and headless tools.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed storage with initial entries.
    #[must_use]
    pub fn with_items<I, K, V>(items: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let items = items.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self { items: Mutex::new(items) }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.lock().unwrap_or_else(std::sync::PoisonError::into_inner).is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .remove(key);
        Ok(())
    }
}
