//! Board aggregate: entity tables, column ordering, and the mutation
//! operations that preserve referential and ordering invariants.

use super::{BoardError, Column, ColumnId, InvariantViolation, Task, TaskDraft, TaskId, TaskPatch};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Titles seeded onto a brand-new board.
const STARTER_COLUMN_TITLES: [&str; 3] = ["To Do", "In Progress", "Done"];

/// Outcome of a [`Board::move_task`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The task changed position.
    Moved,
    /// Source and destination resolved to the same slot; the board is
    /// byte-for-byte identical to before the call.
    Unchanged,
}

impl MoveOutcome {
    /// Returns `true` when the board was actually modified.
    #[must_use]
    pub const fn is_change(self) -> bool {
        matches!(self, Self::Moved)
    }
}

/// Reorder request expressed as drag coordinates: column id + index pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    source_column: ColumnId,
    source_index: usize,
    dest_column: ColumnId,
    dest_index: Option<usize>,
}

impl MoveRequest {
    /// Creates a request that appends the moved task to the destination
    /// column.
    #[must_use]
    pub const fn new(source_column: ColumnId, source_index: usize, dest_column: ColumnId) -> Self {
        Self {
            source_column,
            source_index,
            dest_column,
            dest_index: None,
        }
    }

    /// Sets an explicit destination index.
    ///
    /// Within a single column the index is interpreted against the list
    /// *after* the moved task has been removed; indices past the end are
    /// clamped rather than rejected.
    #[must_use]
    pub const fn with_destination_index(mut self, index: usize) -> Self {
        self.dest_index = Some(index);
        self
    }

    /// Returns the source column.
    #[must_use]
    pub const fn source_column(&self) -> ColumnId {
        self.source_column
    }

    /// Returns the source position.
    #[must_use]
    pub const fn source_index(&self) -> usize {
        self.source_index
    }

    /// Returns the destination column.
    #[must_use]
    pub const fn dest_column(&self) -> ColumnId {
        self.dest_column
    }

    /// Returns the explicit destination index, when one was given.
    #[must_use]
    pub const fn dest_index(&self) -> Option<usize> {
        self.dest_index
    }
}

/// The full board state at one instant.
///
/// Every mutation validates its inputs before touching any table, so a
/// failed call leaves the board exactly as it was. Cloning a board yields
/// a deep copy sharing no mutable structure with the original; the history
/// service relies on this for snapshot isolation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    tasks: HashMap<TaskId, Task>,
    columns: HashMap<ColumnId, Column>,
    column_order: Vec<ColumnId>,
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board seeded with the three starter columns.
    #[must_use]
    pub fn with_starter_columns() -> Self {
        let mut board = Self::new();
        for title in STARTER_COLUMN_TITLES {
            // Starter titles are static and non-empty, so creation cannot
            // fail.
            if let Ok(column) = Column::new(title) {
                board.attach_column(column);
            }
        }
        board
    }

    /// Returns the task table.
    #[must_use]
    pub const fn tasks(&self) -> &HashMap<TaskId, Task> {
        &self.tasks
    }

    /// Returns the column table.
    #[must_use]
    pub const fn columns(&self) -> &HashMap<ColumnId, Column> {
        &self.columns
    }

    /// Returns the left-to-right column ordering.
    #[must_use]
    pub fn column_order(&self) -> &[ColumnId] {
        &self.column_order
    }

    /// Looks up a task by id.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(&id)
    }

    /// Looks up a column by id.
    #[must_use]
    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.get(&id)
    }

    /// Returns the column currently listing the given task.
    #[must_use]
    pub fn column_of_task(&self, task_id: TaskId) -> Option<&Column> {
        self.columns
            .values()
            .find(|column| column.task_ids().contains(&task_id))
    }

    /// Creates a task at the end of the given column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ColumnNotFound`] for an unknown column and
    /// [`BoardError::EmptyTaskTitle`] for a blank draft title.
    pub fn add_task(
        &mut self,
        column_id: ColumnId,
        draft: TaskDraft,
        clock: &impl Clock,
    ) -> Result<Task, BoardError> {
        if !self.columns.contains_key(&column_id) {
            return Err(BoardError::ColumnNotFound(column_id));
        }
        let task = Task::from_draft(draft, clock)?;
        let task_id = task.id();
        self.tasks.insert(task_id, task.clone());
        if let Some(column) = self.columns.get_mut(&column_id) {
            column.push_task(task_id);
        }
        Ok(task)
    }

    /// Merges a patch into an existing task.
    ///
    /// Updating never moves the task between columns; id and creation
    /// timestamp are immutable.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TaskNotFound`] for an unknown task and
    /// [`BoardError::EmptyTaskTitle`] when the patch renames the task to a
    /// blank title.
    pub fn update_task(&mut self, task_id: TaskId, patch: TaskPatch) -> Result<Task, BoardError> {
        let task = self
            .tasks
            .get_mut(&task_id)
            .ok_or(BoardError::TaskNotFound(task_id))?;
        task.apply_patch(patch)?;
        Ok(task.clone())
    }

    /// Removes a task from the task table and from its owning column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TaskNotFound`] when the task does not exist.
    pub fn delete_task(&mut self, task_id: TaskId) -> Result<Task, BoardError> {
        let task = self
            .tasks
            .remove(&task_id)
            .ok_or(BoardError::TaskNotFound(task_id))?;
        for column in self.columns.values_mut() {
            if column.remove_task(task_id) {
                break;
            }
        }
        Ok(task)
    }

    /// Creates an empty column at the end of the column order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyColumnTitle`] for a blank title.
    pub fn add_column(&mut self, title: impl Into<String>) -> Result<Column, BoardError> {
        let column = Column::new(title)?;
        let snapshot = column.clone();
        self.attach_column(column);
        Ok(snapshot)
    }

    /// Removes a column, its ordering slot, and every task it owned.
    ///
    /// Cascade deletion keeps the "every task belongs to exactly one
    /// column" invariant total: no orphaned task can remain in the task
    /// table afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ColumnNotFound`] when the column does not
    /// exist.
    pub fn delete_column(&mut self, column_id: ColumnId) -> Result<(), BoardError> {
        let column = self
            .columns
            .remove(&column_id)
            .ok_or(BoardError::ColumnNotFound(column_id))?;
        self.column_order.retain(|id| *id != column_id);
        for task_id in column.task_ids() {
            self.tasks.remove(task_id);
        }
        Ok(())
    }

    /// Moves a task within or across columns.
    ///
    /// The reorder is an explicit two-step splice: remove the task id at
    /// the source index, then insert it at the destination index. Within a
    /// single column the destination is interpreted against the list after
    /// removal; in both cases indices past the end are clamped to the end
    /// and an omitted destination appends.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ColumnNotFound`] when either column id is
    /// unknown and [`BoardError::IndexOutOfRange`] when the source index
    /// does not name an occupied slot.
    pub fn move_task(&mut self, request: &MoveRequest) -> Result<MoveOutcome, BoardError> {
        if !self.columns.contains_key(&request.source_column) {
            return Err(BoardError::ColumnNotFound(request.source_column));
        }
        if !self.columns.contains_key(&request.dest_column) {
            return Err(BoardError::ColumnNotFound(request.dest_column));
        }
        if request.source_column == request.dest_column {
            return self.move_within_column(request);
        }
        self.move_across_columns(request)
    }

    /// Reorders a task inside one column.
    fn move_within_column(&mut self, request: &MoveRequest) -> Result<MoveOutcome, BoardError> {
        let column = self
            .columns
            .get_mut(&request.source_column)
            .ok_or(BoardError::ColumnNotFound(request.source_column))?;
        let len = column.task_ids().len();
        if request.source_index >= len {
            return Err(BoardError::IndexOutOfRange {
                column: request.source_column,
                index: request.source_index,
                len,
            });
        }
        // Positions in the post-removal list run 0..len-1; clamping the
        // destination there also makes "append" and "omitted" coincide.
        let insert_at = request
            .dest_index
            .map_or(len - 1, |index| index.min(len - 1));
        if insert_at == request.source_index {
            return Ok(MoveOutcome::Unchanged);
        }
        let task_id = column.remove_task_at(request.source_index)?;
        column.insert_task(insert_at, task_id);
        Ok(MoveOutcome::Moved)
    }

    /// Moves a task from one column to another.
    fn move_across_columns(&mut self, request: &MoveRequest) -> Result<MoveOutcome, BoardError> {
        let source = self
            .columns
            .get_mut(&request.source_column)
            .ok_or(BoardError::ColumnNotFound(request.source_column))?;
        let task_id = source.remove_task_at(request.source_index)?;
        let dest = self
            .columns
            .get_mut(&request.dest_column)
            .ok_or(BoardError::ColumnNotFound(request.dest_column))?;
        let insert_at = request
            .dest_index
            .unwrap_or_else(|| dest.task_ids().len());
        dest.insert_task(insert_at, task_id);
        Ok(MoveOutcome::Moved)
    }

    /// Verifies the board's referential and ordering invariants.
    ///
    /// No sequence of the public mutation operations can break these; the
    /// check exists for validating externally supplied state (a loaded
    /// storage record) and for the test suite.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found.
    pub fn check_consistency(&self) -> Result<(), InvariantViolation> {
        for (key, task) in &self.tasks {
            if *key != task.id() {
                return Err(InvariantViolation::TaskKeyMismatch {
                    key: *key,
                    actual: task.id(),
                });
            }
        }
        for (key, column) in &self.columns {
            if *key != column.id() {
                return Err(InvariantViolation::ColumnKeyMismatch {
                    key: *key,
                    actual: column.id(),
                });
            }
        }
        let mut listed = HashSet::new();
        for column in self.columns.values() {
            for task_id in column.task_ids() {
                if !self.tasks.contains_key(task_id) {
                    return Err(InvariantViolation::DanglingTaskRef {
                        column: column.id(),
                        task: *task_id,
                    });
                }
                if !listed.insert(*task_id) {
                    return Err(InvariantViolation::DuplicateTaskRef(*task_id));
                }
            }
        }
        for task_id in self.tasks.keys() {
            if !listed.contains(task_id) {
                return Err(InvariantViolation::OrphanedTask(*task_id));
            }
        }
        let mut ordered = HashSet::new();
        for column_id in &self.column_order {
            if !self.columns.contains_key(column_id) || !ordered.insert(*column_id) {
                return Err(InvariantViolation::ColumnOrderMismatch);
            }
        }
        if self.column_order.len() != self.columns.len() {
            return Err(InvariantViolation::ColumnOrderMismatch);
        }
        Ok(())
    }

    /// Adds a column to the table and the end of the column order.
    fn attach_column(&mut self, column: Column) {
        self.column_order.push(column.id());
        self.columns.insert(column.id(), column);
    }
}
