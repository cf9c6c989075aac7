//! Error types for board domain validation and invariant checking.

use super::{ColumnId, TaskId};
use thiserror::Error;

/// Errors returned by board mutation operations.
///
/// A rejected mutation leaves the board untouched; none of these are fatal
/// and none are retried.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    /// The referenced column does not exist.
    #[error("column not found: {0}")]
    ColumnNotFound(ColumnId),

    /// The referenced task does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// A reorder names a source position outside the column's task list.
    #[error("index {index} out of range for column {column} of length {len}")]
    IndexOutOfRange {
        /// Column whose task list was indexed.
        column: ColumnId,
        /// The rejected position.
        index: usize,
        /// Length of the column's task list at the time of the call.
        len: usize,
    },

    /// A task title was empty or whitespace-only on create or rename.
    #[error("task title must not be empty")]
    EmptyTaskTitle,

    /// A column title was empty or whitespace-only on create.
    #[error("column title must not be empty")]
    EmptyColumnTitle,
}

/// A broken referential or ordering invariant.
///
/// These cannot arise from any sequence of the public mutation operations;
/// they are reported by [`super::Board::check_consistency`] when validating
/// externally supplied state (e.g. a loaded storage record).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    /// A task table entry is keyed under a different id than its own.
    #[error("task table key {key} does not match task id {actual}")]
    TaskKeyMismatch {
        /// The key the entry is stored under.
        key: TaskId,
        /// The id the task itself reports.
        actual: TaskId,
    },

    /// A column table entry is keyed under a different id than its own.
    #[error("column table key {key} does not match column id {actual}")]
    ColumnKeyMismatch {
        /// The key the entry is stored under.
        key: ColumnId,
        /// The id the column itself reports.
        actual: ColumnId,
    },

    /// A column's task list references an id absent from the task table.
    #[error("column {column} references unknown task {task}")]
    DanglingTaskRef {
        /// Column holding the dangling reference.
        column: ColumnId,
        /// The unknown task id.
        task: TaskId,
    },

    /// A task id appears more than once across the column task lists.
    #[error("task {0} is listed in more than one position")]
    DuplicateTaskRef(TaskId),

    /// A task exists in the task table but no column lists it.
    #[error("task {0} is not listed in any column")]
    OrphanedTask(TaskId),

    /// The column order is not a permutation of the column table's keys.
    #[error("column order does not match the column table")]
    ColumnOrderMismatch,
}

/// Error returned while parsing theme names from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown theme: {0}")]
pub struct ParseThemeError(pub String);
