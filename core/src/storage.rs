//! Key-value storage abstraction.
//!
//! Persistence in this architecture is a single named slot in a string-keyed,
//! string-valued store with the same contract as browser local storage.
//! Reducers never touch a storage directly; they describe reads and writes as
//! [`StorageOperation`](crate::effect::StorageOperation) effects.
//!
//! # Implementations
//!
//! - [`MemoryStorage`]: process-local map, for ephemeral sessions and tests
//! - `FileStorage` (in the `todomvc` crate): JSON file on disk

use std::collections::HashMap;
use std::sync::Mutex;
use thiserror::Error;

/// Errors that can occur during storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Underlying I/O failure.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing medium held data that could not be encoded or decoded.
    #[error("Storage serialization error: {0}")]
    Serialization(String),

    /// The storage refused the operation.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// String-keyed, string-valued storage with local-storage semantics.
///
/// Reads of a missing key return `Ok(None)`, never an error.
pub trait KeyValueStorage: Send + Sync {
    /// Read the value held under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backing medium cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value held under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backing medium cannot be written.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory storage.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty storage
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage pre-seeded with one slot
    #[must_use]
    pub fn with_item(key: impl Into<String>, value: impl Into<String>) -> Self {
        let storage = Self::new();
        storage
            .slots
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .insert(key.into(), value.into());
        storage
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self
            .slots
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .get(key)
            .cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
