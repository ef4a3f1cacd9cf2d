//! Storage test doubles
//!
//! - [`FailingStorage`]: every operation fails, for exercising error paths
//! - [`RecordingStorage`]: an in-memory storage that keeps every write

use std::sync::Mutex;
use todomvc_core::storage::{KeyValueStorage, MemoryStorage, StorageError};

/// Storage whose reads and writes always fail.
#[derive(Debug, Clone, Default)]
pub struct FailingStorage {
    reason: String,
}

impl FailingStorage {
    /// Create a storage failing with the given reason
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl KeyValueStorage for FailingStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable(self.reason.clone()))
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable(self.reason.clone()))
    }
}

/// In-memory storage that records every write in order.
///
/// # Example
///
/// ```
/// use todomvc_testing::RecordingStorage;
/// use todomvc_core::storage::KeyValueStorage;
///
/// let storage = RecordingStorage::new();
/// storage.set_item("todos", "[]").unwrap();
/// assert_eq!(storage.writes(), vec![("todos".to_string(), "[]".to_string())]);
/// ```
#[derive(Debug, Default)]
pub struct RecordingStorage {
    inner: MemoryStorage,
    writes: Mutex<Vec<(String, String)>>,
}

impl RecordingStorage {
    /// Create an empty recording storage
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All writes so far, oldest first
    #[must_use]
    pub fn writes(&self) -> Vec<(String, String)> {
        self.writes
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// Number of writes so far
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .len()
    }
}

impl KeyValueStorage for RecordingStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.writes
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push((key.to_string(), value.to_string()));
        self.inner.set_item(key, value)
    }
}
