//! Integration tests for the JSON file storage adapter.

use std::fs;
use std::sync::Arc;

use mockable::DefaultClock;
use tempfile::TempDir;
use trellis::board::{
    adapters::json::JsonFileStorage,
    domain::{Board, TaskDraft, Theme},
    ports::{BoardRecord, BoardStorage, STORAGE_KEY, StorageError},
    services::BoardHistoryService,
};

type FileService = BoardHistoryService<JsonFileStorage, DefaultClock>;

fn storage_in(dir: &TempDir) -> JsonFileStorage {
    JsonFileStorage::new(dir.path().join("board.json"))
}

#[test]
fn missing_file_loads_as_empty() {
    let dir = TempDir::new().expect("create temp dir");
    let storage = storage_in(&dir);

    let loaded = storage.load().expect("load should succeed");

    assert!(loaded.is_none());
}

#[test]
fn save_then_load_round_trips() {
    let dir = TempDir::new().expect("create temp dir");
    let storage = storage_in(&dir);
    let record = BoardRecord {
        board: Board::with_starter_columns(),
        theme: Theme::Dark,
    };

    storage.save(&record).expect("save should succeed");
    let loaded = storage.load().expect("load should succeed");

    assert_eq!(loaded, Some(record));
}

#[test]
fn document_is_keyed_under_the_storage_key() {
    let dir = TempDir::new().expect("create temp dir");
    let storage = storage_in(&dir);
    let record = BoardRecord {
        board: Board::with_starter_columns(),
        theme: Theme::Light,
    };
    storage.save(&record).expect("save should succeed");

    let bytes = fs::read(storage.path()).expect("document exists");
    let document: serde_json::Value = serde_json::from_slice(&bytes).expect("valid JSON");

    assert!(document.get(STORAGE_KEY).is_some());
}

#[test]
fn unreadable_document_is_a_persistence_error() {
    let dir = TempDir::new().expect("create temp dir");
    let storage = storage_in(&dir);
    fs::write(storage.path(), b"not json at all").expect("write garbage");

    let result = storage.load();

    assert!(matches!(result, Err(StorageError::Persistence(_))));
}

#[test]
fn session_survives_a_restart() {
    let dir = TempDir::new().expect("create temp dir");

    let saved_board = {
        let mut service = FileService::load_or_default(
            Arc::new(storage_in(&dir)),
            Arc::new(DefaultClock),
        )
        .expect("fresh session should start");
        let column = service.board().column_order()[0];
        service
            .add_task(column, TaskDraft::new("persisted across restart"))
            .expect("task creation should succeed");
        service.set_theme(Theme::Purple);
        service.board().clone()
    };

    let restored = FileService::load_or_default(
        Arc::new(storage_in(&dir)),
        Arc::new(DefaultClock),
    )
    .expect("restore should succeed");

    assert_eq!(restored.board(), &saved_board);
    assert_eq!(restored.theme(), Theme::Purple);
    assert!(!restored.can_undo());
}
