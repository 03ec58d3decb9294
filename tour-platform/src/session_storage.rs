//! Session-scoped key/value storage.
//!
//! ## Usage
//!
//! Store values a downstream page reads after navigation. Nothing here is
//! persisted; the store lives as long as the application session.

use std::collections::HashMap;

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::debug;

/// Errors raised by JSON helpers of [`SessionStorage`].
#[derive(Debug, Error)]
pub enum StorageError {
    /// The value could not be serialized.
    #[error("failed to serialize value for key `{key}`")]
    Serialize {
        /// Storage key.
        key: String,
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },
    /// The stored string is not valid JSON for the requested type.
    #[error("failed to deserialize value stored under `{key}`")]
    Deserialize {
        /// Storage key.
        key: String,
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },
}

/// String key/value store scoped to one session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionStorage {
    items: HashMap<String, String>,
}

impl SessionStorage {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn set_item(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        debug!(%key, "session storage set");
        self.items.insert(key, value.into());
    }

    /// Returns the value stored under `key`.
    pub fn get_item(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }

    /// Removes the value stored under `key`, returning it.
    pub fn remove_item(&mut self, key: &str) -> Option<String> {
        self.items.remove(key)
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Serializes `value` as JSON and stores it under `key`.
    pub fn set_json<T: Serialize + ?Sized>(
        &mut self,
        key: &str,
        value: &T,
    ) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(value).map_err(|source| StorageError::Serialize {
            key: key.to_owned(),
            source,
        })?;
        self.set_item(key, encoded);
        Ok(())
    }

    /// Reads and deserializes the JSON stored under `key`.
    ///
    /// Returns `Ok(None)` when nothing is stored.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let Some(raw) = self.get_item(key) else {
            return Ok(None);
        };
        serde_json::from_str(raw)
            .map(Some)
            .map_err(|source| StorageError::Deserialize {
                key: key.to_owned(),
                source,
            })
    }
}
