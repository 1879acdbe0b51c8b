//! Key/value storage for persisted UI state
//!
//! Mirrors the Web Storage API: string keys, string values, synchronous
//! access. Values written by components are JSON encoded.

use std::collections::HashMap;
use std::fmt::Debug;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Errors raised by storage adapters
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The backing store does not exist in this environment
    #[error("storage is not available")]
    Unavailable,

    /// Reading or writing the backing file failed
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored value could not be encoded or decoded
    #[error("storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Error reported by the underlying platform
    #[error("storage backend error: {0}")]
    Backend(String),

    /// Error acquiring lock
    #[error("storage lock poisoned")]
    Lock,
}

/// Synchronous string key/value store
pub trait Storage: Send + Sync + Debug {
    /// Read a value
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a value
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Read and decode a JSON value. Missing keys, unreadable storage and
/// malformed values all yield `None`; failures are logged.
pub fn load_json<T: DeserializeOwned>(storage: &dyn Storage, key: &str) -> Option<T> {
    let raw = match storage.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            log::warn!("failed to read `{key}` from storage: {err}");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("ignoring malformed value for `{key}`: {err}");
            None
        }
    }
}

/// Encode and write a JSON value, logging failures
pub fn store_json<T: Serialize + ?Sized>(storage: &dyn Storage, key: &str, value: &T) -> bool {
    let result = serde_json::to_string(value)
        .map_err(StorageError::from)
        .and_then(|raw| storage.set_item(key, &raw));

    match result {
        Ok(()) => true,
        Err(err) => {
            log::warn!("failed to write `{key}` to storage: {err}");
            false
        }
    }
}

/// Process-local storage
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.values.lock().map(|values| values.len()).unwrap_or(0)
    }

    /// Whether nothing is stored
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let values = self.values.lock().map_err(|_| StorageError::Lock)?;
        Ok(values.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self.values.lock().map_err(|_| StorageError::Lock)?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut values = self.values.lock().map_err(|_| StorageError::Lock)?;
        values.remove(key);
        Ok(())
    }
}

/// Storage persisted to a JSON object file, re-read on every access
///
/// Read-modify-write is serialised within one `FileStorage` only; two
/// instances pointing at the same file can lose each other's writes.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    guard: Mutex<()>,
}

impl FileStorage {
    /// Use (and lazily create) the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            guard: Mutex::new(()),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<HashMap<String, String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(HashMap::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(HashMap::new()),
            Err(err) => Err(err.into()),
        }
    }

    fn write_all(&self, values: &HashMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(values)?)?;
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.guard.lock().map_err(|_| StorageError::Lock)?;
        Ok(self.read_all()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.guard.lock().map_err(|_| StorageError::Lock)?;
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());
        self.write_all(&values)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.guard.lock().map_err(|_| StorageError::Lock)?;
        let mut values = self.read_all()?;
        if values.remove(key).is_some() {
            self.write_all(&values)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage() {
        let storage = MemoryStorage::new();
        assert!(storage.is_empty());
        storage.set_item("a", "1").unwrap();
        assert_eq!(storage.get_item("a").unwrap().as_deref(), Some("1"));
        storage.remove_item("a").unwrap();
        assert_eq!(storage.get_item("a").unwrap(), None);
    }

    #[test]
    fn test_json_helpers() {
        let storage = MemoryStorage::new();
        assert!(store_json(&storage, "flag", &true));
        assert_eq!(storage.get_item("flag").unwrap().as_deref(), Some("true"));
        assert_eq!(load_json::<bool>(&storage, "flag"), Some(true));

        storage.set_item("broken", "{not json").unwrap();
        assert_eq!(load_json::<bool>(&storage, "broken"), None);
        assert_eq!(load_json::<bool>(&storage, "missing"), None);
    }

    #[test]
    fn test_file_storage_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state").join("ui.json");

        let storage = FileStorage::new(&path);
        assert_eq!(storage.get_item("x").unwrap(), None);
        storage.set_item("x", "[\"a\"]").unwrap();
        storage.set_item("y", "false").unwrap();

        let reopened = FileStorage::new(&path);
        assert_eq!(reopened.get_item("x").unwrap().as_deref(), Some("[\"a\"]"));
        reopened.remove_item("x").unwrap();
        assert_eq!(storage.get_item("x").unwrap(), None);
        assert_eq!(storage.get_item("y").unwrap().as_deref(), Some("false"));
    }

    #[test]
    fn test_file_storage_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ui.json");
        fs::write(&path, "not json").unwrap();

        let storage = FileStorage::new(&path);
        assert!(matches!(
            storage.get_item("x"),
            Err(StorageError::Serialization(_))
        ));
        assert_eq!(load_json::<bool>(&storage, "x"), None);
    }
}
