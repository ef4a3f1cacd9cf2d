//! File-backed key-value storage.
//!
//! All slots live in one JSON object file. Each write rewrites the whole file
//! through a temporary sibling that is renamed into place, so a crash leaves
//! either the old or the new contents.

use std::collections::BTreeMap;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use todomvc_core::storage::{KeyValueStorage, StorageError};

type Slots = BTreeMap<String, String>;

/// Storage persisted to a JSON file
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    // Serializes read-modify-write cycles within the process
    lock: Mutex<()>,
}

impl FileStorage {
    /// Storage backed by the file at `path`
    ///
    /// The file and its parent directories are created on the first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_slots(&self) -> Result<Slots, StorageError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Slots::new()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&raw).unwrap_or_else(|error| {
            tracing::warn!(
                path = %self.path.display(),
                %error,
                "Storage file is unparsable, treating it as empty"
            );
            Slots::new()
        }))
    }

    fn write_slots(&self, slots: &Slots) -> Result<(), StorageError> {
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir)?;

        let body = serde_json::to_vec_pretty(slots)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        let mut file = tempfile::NamedTempFile::new_in(dir)?;
        file.write_all(&body)?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|e| StorageError::Io(e.error))?;
        Ok(())
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(self.read_slots()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let mut slots = self.read_slots()?;
        slots.insert(key.to_string(), value.to_string());
        self.write_slots(&slots)?;
        tracing::trace!(path = %self.path.display(), key, bytes = value.len(), "Wrote storage slot");
        Ok(())
    }
}
