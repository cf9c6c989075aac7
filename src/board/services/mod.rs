//! Application services for board state orchestration.

mod history;

pub use history::{BoardHistoryService, DEFAULT_HISTORY_DEPTH};
