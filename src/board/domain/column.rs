//! Column entity: a titled, ordered list of task references.

use super::{BoardError, ColumnId, TaskId};
use serde::{Deserialize, Serialize};

/// A column on the board.
///
/// The column references tasks by id in display order; it never owns the
/// task records themselves. The board guarantees every listed id exists in
/// the task table and appears in exactly one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    id: ColumnId,
    title: String,
    task_ids: Vec<TaskId>,
}

impl Column {
    /// Creates an empty column with the given title.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyColumnTitle`] when the title is empty
    /// after trimming.
    pub fn new(title: impl Into<String>) -> Result<Self, BoardError> {
        let raw = title.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(BoardError::EmptyColumnTitle);
        }
        Ok(Self {
            id: ColumnId::new(),
            title: trimmed.to_owned(),
            task_ids: Vec::new(),
        })
    }

    /// Returns the column identifier.
    #[must_use]
    pub const fn id(&self) -> ColumnId {
        self.id
    }

    /// Returns the column title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the ordered task references.
    #[must_use]
    pub fn task_ids(&self) -> &[TaskId] {
        &self.task_ids
    }

    /// Appends a task reference at the end of the column.
    pub(crate) fn push_task(&mut self, task_id: TaskId) {
        self.task_ids.push(task_id);
    }

    /// Inserts a task reference, clamping the index to the list length.
    pub(crate) fn insert_task(&mut self, index: usize, task_id: TaskId) {
        let clamped = index.min(self.task_ids.len());
        self.task_ids.insert(clamped, task_id);
    }

    /// Removes and returns the task reference at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::IndexOutOfRange`] when `index` does not name an
    /// occupied position.
    pub(crate) fn remove_task_at(&mut self, index: usize) -> Result<TaskId, BoardError> {
        if index >= self.task_ids.len() {
            return Err(BoardError::IndexOutOfRange {
                column: self.id,
                index,
                len: self.task_ids.len(),
            });
        }
        Ok(self.task_ids.remove(index))
    }

    /// Drops a task reference wherever it appears, returning whether it was
    /// present.
    pub(crate) fn remove_task(&mut self, task_id: TaskId) -> bool {
        let before = self.task_ids.len();
        self.task_ids.retain(|id| *id != task_id);
        before != self.task_ids.len()
    }
}
