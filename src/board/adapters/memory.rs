//! In-memory storage adapter for tests and ephemeral sessions.

use crate::board::ports::{BoardRecord, BoardStorage, StorageError, StorageResult};
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory board storage.
///
/// Clones share the same underlying slot, which lets a test keep a handle
/// to the storage a service was constructed with.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoardStorage {
    slot: Arc<RwLock<Option<BoardRecord>>>,
}

impl InMemoryBoardStorage {
    /// Creates an empty in-memory storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a storage pre-populated with a record, as if a previous
    /// session had saved it.
    #[must_use]
    pub fn with_record(record: BoardRecord) -> Self {
        Self {
            slot: Arc::new(RwLock::new(Some(record))),
        }
    }
}

impl BoardStorage for InMemoryBoardStorage {
    fn save(&self, record: &BoardRecord) -> StorageResult<()> {
        let mut slot = self
            .slot
            .write()
            .map_err(|err| StorageError::persistence(std::io::Error::other(err.to_string())))?;
        *slot = Some(record.clone());
        Ok(())
    }

    fn load(&self) -> StorageResult<Option<BoardRecord>> {
        let slot = self
            .slot
            .read()
            .map_err(|err| StorageError::persistence(std::io::Error::other(err.to_string())))?;
        Ok(slot.clone())
    }
}
