//! Domain model for board state management.
//!
//! The board domain models tasks, columns, column ordering, and the
//! mutation operations over them while keeping all infrastructure
//! concerns outside of the domain boundary.

mod board;
mod column;
mod error;
mod ids;
mod task;
mod theme;

pub use board::{Board, MoveOutcome, MoveRequest};
pub use column::Column;
pub use error::{BoardError, InvariantViolation, ParseThemeError};
pub use ids::{ColumnId, TaskId};
pub use task::{Task, TaskDraft, TaskPatch};
pub use theme::Theme;
