//! Storage backends - the keyed-blob seam the journal persists through.
//!
//! Mirrors the shape of a platform key-value defaults store: each record is
//! one independent blob under a stable key, written whole on every mutation.

use log::debug;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Record key for the saved reflections list.
pub const REFLECTIONS_KEY: &str = "saved_reflections";

/// Record key for the completed-story set.
pub const PROGRESS_KEY: &str = "completed_stories";

/// Errors from storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A synchronous keyed-blob store.
///
/// `read` of a key never written returns `Ok(None)`; callers treat that the
/// same as an empty record. Writes replace the whole blob for the key.
pub trait StorageBackend {
    /// Read the blob stored under `key`, if any.
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Replace the blob stored under `key`.
    fn write(&mut self, key: &str, bytes: &[u8]) -> Result<(), StorageError>;
}

/// File-backed storage: one file per key under a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create a file storage rooted at the given directory. The directory
    /// is created on the first write, not here.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileStorage {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&mut self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), bytes)?;
        debug!("wrote {} bytes under key '{}'", bytes.len(), key);
        Ok(())
    }
}

/// In-memory storage for tests and previews.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    records: HashMap<String, Vec<u8>>,
}

impl MemoryStorage {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.records.get(key).cloned())
    }

    fn write(&mut self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        self.records.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_storage_round_trip() {
        let mut storage = MemoryStorage::new();
        assert!(storage.read("missing").unwrap().is_none());

        storage.write("record", b"payload").unwrap();
        assert_eq!(storage.read("record").unwrap().unwrap(), b"payload");

        storage.write("record", b"replaced").unwrap();
        assert_eq!(storage.read("record").unwrap().unwrap(), b"replaced");
    }

    #[test]
    fn test_file_storage_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut storage = FileStorage::new(dir.path());

        assert!(storage.read(REFLECTIONS_KEY).unwrap().is_none());

        storage.write(REFLECTIONS_KEY, b"[]").unwrap();
        assert_eq!(storage.read(REFLECTIONS_KEY).unwrap().unwrap(), b"[]");

        // A second handle over the same directory sees the data.
        let reopened = FileStorage::new(dir.path());
        assert_eq!(reopened.read(REFLECTIONS_KEY).unwrap().unwrap(), b"[]");
    }

    #[test]
    fn test_file_storage_creates_directory_on_write() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("kalaido").join("state");
        let mut storage = FileStorage::new(&nested);

        storage.write(PROGRESS_KEY, b"[]").unwrap();
        assert!(nested.join("completed_stories.json").exists());
    }
}
