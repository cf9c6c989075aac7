//! Port contracts for board state management.
//!
//! Ports define infrastructure-agnostic interfaces used by the history
//! service.

pub mod storage;

pub use storage::{BoardRecord, BoardStorage, STORAGE_KEY, StorageError, StorageResult};
