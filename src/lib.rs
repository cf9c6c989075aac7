//! Trellis: kanban board state engine.
//!
//! This crate owns the authoritative state of a kanban board (ordered
//! columns, each holding an ordered list of tasks) together with
//! snapshot-based undo/redo of every state-mutating action. Rendering,
//! drag gesture capture, and form handling live in a presentation layer
//! that is out of scope here;
//! it consumes the live board for display and calls the mutation entry
//! points exposed by [`board::services::BoardHistoryService`].
//!
//! # Architecture
//!
//! Trellis follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board state and mutation operations with no
//!   infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, JSON file)
//!
//! # Modules
//!
//! - [`board`]: Board entities, mutation operations, snapshot history,
//!   and persistence

pub mod board;
