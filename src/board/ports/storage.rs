//! Storage port for persisting the board between sessions.

use crate::board::domain::{Board, InvariantViolation, Theme};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Fixed key under which the record is stored.
///
/// Persistence is a single keyed record: the live board plus the current
/// theme selection. History stacks are deliberately not persisted.
pub const STORAGE_KEY: &str = "kanban-board";

/// Result type for board storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// The persisted state: the live board and the theme preference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardRecord {
    /// The board at the time of the save.
    pub board: Board,
    /// The theme selected at the time of the save.
    pub theme: Theme,
}

/// Board persistence contract.
///
/// Saving is an out-of-band side effect triggered after a mutation
/// settles, never a precondition for the mutation to commit; implementors
/// must not block on anything slower than local I/O.
pub trait BoardStorage: Send + Sync {
    /// Persists the record under [`STORAGE_KEY`], replacing any previous
    /// one.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Persistence`] when the backing store rejects
    /// the write.
    fn save(&self, record: &BoardRecord) -> StorageResult<()>;

    /// Loads the most recently saved record.
    ///
    /// Returns `None` when nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Persistence`] when the backing store cannot
    /// be read or the stored document cannot be decoded.
    fn load(&self) -> StorageResult<Option<BoardRecord>>;
}

/// Errors returned by board storage implementations.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// The stored record violates a board invariant.
    #[error("stored board record is invalid: {0}")]
    Corrupt(#[from] InvariantViolation),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl StorageError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
