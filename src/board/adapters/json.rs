//! JSON file storage adapter.
//!
//! Persists the board record as the value of [`STORAGE_KEY`] inside a
//! single JSON document, mirroring a keyed record store.

use crate::board::ports::{BoardRecord, BoardStorage, STORAGE_KEY, StorageError, StorageResult};
use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Board storage backed by a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Creates a storage writing to the given file path.
    ///
    /// The file is created on the first save; a missing file reads as an
    /// empty store.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BoardStorage for JsonFileStorage {
    fn save(&self, record: &BoardRecord) -> StorageResult<()> {
        let value = serde_json::to_value(record).map_err(StorageError::persistence)?;
        let mut document = Map::new();
        document.insert(STORAGE_KEY.to_owned(), value);
        let bytes = serde_json::to_vec_pretty(&document).map_err(StorageError::persistence)?;
        fs::write(&self.path, bytes).map_err(StorageError::persistence)
    }

    fn load(&self) -> StorageResult<Option<BoardRecord>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(StorageError::persistence(err)),
        };
        let mut document: Map<String, Value> =
            serde_json::from_slice(&bytes).map_err(StorageError::persistence)?;
        let Some(value) = document.remove(STORAGE_KEY) else {
            return Ok(None);
        };
        let record = serde_json::from_value(value).map_err(StorageError::persistence)?;
        Ok(Some(record))
    }
}
