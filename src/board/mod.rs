//! Board state management for Trellis.
//!
//! This module implements the board state engine: creating, updating,
//! deleting, and reordering tasks and columns while preserving referential
//! and ordering invariants, with snapshot-based undo/redo wrapped around
//! every state-mutating operation. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The history service in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
