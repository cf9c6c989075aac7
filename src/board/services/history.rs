//! History service: snapshot-based undo/redo wrapped around the board.

use crate::board::{
    domain::{
        Board, BoardError, Column, ColumnId, MoveOutcome, MoveRequest, Task, TaskDraft, TaskId,
        TaskPatch, Theme,
    },
    ports::{BoardRecord, BoardStorage, StorageResult},
};
use mockable::Clock;
use std::collections::VecDeque;
use std::mem;
use std::sync::Arc;

/// Default bound on the undo and redo stacks.
///
/// Snapshots are full board copies, so an unbounded history grows without
/// limit over a long session; past the bound the oldest snapshot is
/// discarded.
pub const DEFAULT_HISTORY_DEPTH: usize = 100;

/// The board's single logical actor: owns the live board, the snapshot
/// stacks, and the theme preference.
///
/// Every mutating entry point applies the operation to a working copy of
/// the live board; only on success does the previous board move onto the
/// `past` stack and the copy become live. A failed mutation therefore
/// leaves both the board and the history untouched, and a stored snapshot
/// can never alias live mutable state.
///
/// Collaborators are injected rather than ambient: the storage port
/// receives an out-of-band save after each committed change, and the clock
/// stamps task creation times.
#[derive(Clone)]
pub struct BoardHistoryService<S, C>
where
    S: BoardStorage,
    C: Clock + Send + Sync,
{
    storage: Arc<S>,
    clock: Arc<C>,
    present: Board,
    theme: Theme,
    past: Vec<Board>,
    future: VecDeque<Board>,
    depth_limit: usize,
}

impl<S, C> BoardHistoryService<S, C>
where
    S: BoardStorage,
    C: Clock + Send + Sync,
{
    /// Creates a service with a fresh starter board and empty history.
    #[must_use]
    pub fn new(storage: Arc<S>, clock: Arc<C>) -> Self {
        Self::with_state(storage, clock, Board::with_starter_columns(), Theme::default())
    }

    /// Restores the persisted board and theme, or starts a fresh board
    /// when nothing has been stored yet.
    ///
    /// History is not persisted; a restored session starts with empty
    /// undo/redo stacks.
    ///
    /// # Errors
    ///
    /// Returns [`crate::board::ports::StorageError::Persistence`] when the
    /// store cannot be read and
    /// [`crate::board::ports::StorageError::Corrupt`] when the stored
    /// record violates a board invariant.
    pub fn load_or_default(storage: Arc<S>, clock: Arc<C>) -> StorageResult<Self> {
        let Some(record) = storage.load()? else {
            return Ok(Self::new(storage, clock));
        };
        record.board.check_consistency()?;
        Ok(Self::with_state(storage, clock, record.board, record.theme))
    }

    /// Replaces the default history depth bound.
    ///
    /// When the new bound is smaller than the current stacks, the oldest
    /// snapshots are discarded first.
    #[must_use]
    pub fn with_history_depth(mut self, depth: usize) -> Self {
        self.depth_limit = depth;
        while self.past.len() > depth {
            self.past.remove(0);
        }
        self.future.truncate(depth);
        self
    }

    /// Returns the live board for rendering.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.present
    }

    /// Returns the current theme selection.
    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    /// Returns the record that would be persisted right now.
    #[must_use]
    pub fn record(&self) -> BoardRecord {
        BoardRecord {
            board: self.present.clone(),
            theme: self.theme,
        }
    }

    /// Returns `true` when an undo would change state.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Returns `true` when a redo would change state.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Returns the number of undoable snapshots.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    /// Returns the number of redoable snapshots.
    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }

    /// Creates a task at the end of the given column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ColumnNotFound`] or
    /// [`BoardError::EmptyTaskTitle`]; the board and history are unchanged
    /// on error.
    pub fn add_task(&mut self, column_id: ColumnId, draft: TaskDraft) -> Result<Task, BoardError> {
        self.commit(|board, clock| board.add_task(column_id, draft, clock))
    }

    /// Merges a patch into an existing task.
    ///
    /// An empty patch is a true no-op: it pushes no snapshot and leaves the
    /// redo stack intact.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TaskNotFound`] or
    /// [`BoardError::EmptyTaskTitle`].
    pub fn update_task(&mut self, task_id: TaskId, patch: TaskPatch) -> Result<Task, BoardError> {
        if patch.is_empty() {
            return self
                .present
                .task(task_id)
                .cloned()
                .ok_or(BoardError::TaskNotFound(task_id));
        }
        self.commit(|board, _| board.update_task(task_id, patch))
    }

    /// Deletes a task from the board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TaskNotFound`].
    pub fn delete_task(&mut self, task_id: TaskId) -> Result<Task, BoardError> {
        self.commit(|board, _| board.delete_task(task_id))
    }

    /// Creates an empty column at the end of the column order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyColumnTitle`].
    pub fn add_column(&mut self, title: impl Into<String>) -> Result<Column, BoardError> {
        self.commit(|board, _| board.add_column(title))
    }

    /// Deletes a column together with the tasks it owned.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ColumnNotFound`].
    pub fn delete_column(&mut self, column_id: ColumnId) -> Result<(), BoardError> {
        self.commit(|board, _| board.delete_column(column_id))
    }

    /// Moves a task within or across columns.
    ///
    /// A move that resolves to the task's current slot returns
    /// [`MoveOutcome::Unchanged`] and pushes no snapshot, so a subsequent
    /// undo reverts the previous real action instead.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ColumnNotFound`] or
    /// [`BoardError::IndexOutOfRange`].
    pub fn move_task(&mut self, request: &MoveRequest) -> Result<MoveOutcome, BoardError> {
        let mut next = self.present.clone();
        let outcome = next.move_task(request)?;
        if outcome.is_change() {
            self.record_snapshot(next);
            self.save_out_of_band();
        }
        Ok(outcome)
    }

    /// Reverts the most recent committed mutation.
    ///
    /// Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.past.pop() else {
            return false;
        };
        let current = mem::replace(&mut self.present, previous);
        self.future.push_front(current);
        tracing::debug!(past = self.past.len(), future = self.future.len(), "undo");
        self.save_out_of_band();
        true
    }

    /// Re-applies the most recently undone mutation.
    ///
    /// Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.future.pop_front() else {
            return false;
        };
        let current = mem::replace(&mut self.present, next);
        self.push_past(current);
        tracing::debug!(past = self.past.len(), future = self.future.len(), "redo");
        self.save_out_of_band();
        true
    }

    /// Selects a new theme.
    ///
    /// Theme selection is presentation preference, not board content: it is
    /// saved but never enters the undo/redo stream.
    pub fn set_theme(&mut self, theme: Theme) {
        if self.theme == theme {
            return;
        }
        self.theme = theme;
        tracing::debug!(theme = theme.as_str(), "theme changed");
        self.save_out_of_band();
    }

    const fn with_state(storage: Arc<S>, clock: Arc<C>, board: Board, theme: Theme) -> Self {
        Self {
            storage,
            clock,
            present: board,
            theme,
            past: Vec::new(),
            future: VecDeque::new(),
            depth_limit: DEFAULT_HISTORY_DEPTH,
        }
    }

    /// Applies a mutation to a working copy and, on success, commits it
    /// behind a snapshot boundary.
    ///
    /// The history layer stays ignorant of *what* changed; it only records
    /// *that* a boundary occurred.
    fn commit<T>(
        &mut self,
        op: impl FnOnce(&mut Board, &C) -> Result<T, BoardError>,
    ) -> Result<T, BoardError> {
        let mut next = self.present.clone();
        let value = op(&mut next, self.clock.as_ref())?;
        self.record_snapshot(next);
        self.save_out_of_band();
        Ok(value)
    }

    /// Pushes the outgoing board onto `past` and clears `future`: a fresh
    /// edit branches history, so stale redo states must not survive.
    fn record_snapshot(&mut self, next: Board) {
        let snapshot = mem::replace(&mut self.present, next);
        self.push_past(snapshot);
        self.future.clear();
        tracing::debug!(past = self.past.len(), "mutation committed");
    }

    fn push_past(&mut self, snapshot: Board) {
        self.past.push(snapshot);
        if self.past.len() > self.depth_limit {
            self.past.remove(0);
        }
    }

    /// Persists the current record without gating the mutation on it.
    ///
    /// Persistence is a side effect triggered after a state change settles;
    /// a failing store must not roll back a committed mutation.
    fn save_out_of_band(&self) {
        if let Err(err) = self.storage.save(&self.record()) {
            tracing::warn!(error = %err, "board save failed; in-memory state remains committed");
        }
    }
}
