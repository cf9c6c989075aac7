//! Shared world state for board behaviour BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use trellis::board::{
    adapters::memory::InMemoryBoardStorage, domain::ColumnId, services::BoardHistoryService,
};

/// Service type used by the BDD world.
pub type TestBoardService = BoardHistoryService<InMemoryBoardStorage, DefaultClock>;

/// Scenario world for board behaviour tests.
pub struct BoardWorld {
    pub service: TestBoardService,
    pub scenario_column: Option<ColumnId>,
}

impl BoardWorld {
    /// Creates a world with a fresh board and no scenario column yet.
    #[must_use]
    pub fn new() -> Self {
        let service = BoardHistoryService::new(
            Arc::new(InMemoryBoardStorage::new()),
            Arc::new(DefaultClock),
        );
        Self {
            service,
            scenario_column: None,
        }
    }

    /// Returns the column set up by the scenario's given step.
    pub fn column(&self) -> Result<ColumnId, eyre::Report> {
        self.scenario_column
            .ok_or_else(|| eyre::eyre!("missing scenario column in world"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}
