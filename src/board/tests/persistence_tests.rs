//! Snapshot persistence tests: round-trips, fallbacks, and failure paths.

use rstest::rstest;

use super::fixtures::{SteppingClock, TestStore, sprint_board, test_store};
use crate::board::adapters::{InMemorySnapshotStore, JsonFileSnapshotStore};
use crate::board::domain::{BoardDraft, TaskDraft, TaskPriority, User};
use crate::board::ports::snapshot::MockSnapshotStore;
use crate::board::ports::{STORAGE_SLOT, SnapshotError, SnapshotStore};
use crate::board::services::{BoardStore, StoreError};

fn populated_store() -> TestStore {
    let mut store = test_store();
    let (_, [todo, _, _]) = sprint_board(&mut store);
    store
        .add_task(
            TaskDraft::new(todo, "Write spec", User::demo_id())
                .with_description("cover ordering invariants")
                .with_priority(TaskPriority::High)
                .with_due_date(super::fixtures::fixed_instant())
                .assigned_to(User::demo_id()),
        )
        .expect("add task");
    store.set_search_query("spec").expect("set query");
    store
}

fn temp_root() -> String {
    let path = std::env::temp_dir().join(format!("plank-snapshots-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&path).expect("create temp dir");
    path.to_str().expect("utf8 temp path").to_owned()
}

#[rstest]
fn document_round_trips_through_json() {
    let store = populated_store();
    let encoded = serde_json::to_string(store.state()).expect("encode");
    let decoded: crate::board::domain::BoardState =
        serde_json::from_str(&encoded).expect("decode");
    assert_eq!(&decoded, store.state());
}

#[rstest]
fn reopening_from_the_same_slot_restores_the_document() {
    let slot = InMemorySnapshotStore::new();
    let mut store =
        BoardStore::open(slot.clone(), SteppingClock::new()).expect("open first session");
    store
        .add_board(BoardDraft::new("Sprint 1", User::demo_id()))
        .expect("add board");
    let persisted = store.state().clone();

    let reopened = BoardStore::open(slot, SteppingClock::new()).expect("open second session");
    assert_eq!(reopened.state(), &persisted);
}

#[rstest]
fn document_serialises_with_camel_case_keys() {
    let store = populated_store();
    let value = serde_json::to_value(store.state()).expect("encode");

    let document = value.as_object().expect("document object");
    for key in ["boards", "users", "searchQuery", "filterPriority", "filterAssignee"] {
        assert!(document.contains_key(key), "missing document key {key}");
    }

    let task = value
        .pointer("/boards/0/columns/0/tasks/0")
        .and_then(serde_json::Value::as_object)
        .expect("task object");
    for key in [
        "id",
        "title",
        "description",
        "priority",
        "dueDate",
        "createdBy",
        "assignedTo",
        "createdAt",
        "updatedAt",
        "columnId",
        "position",
    ] {
        assert!(task.contains_key(key), "missing task key {key}");
    }
    assert_eq!(task.get("priority"), Some(&serde_json::json!("high")));
    assert_eq!(
        value.pointer("/boards/0/priority"),
        Some(&serde_json::json!("Medium"))
    );
}

#[rstest]
fn file_store_round_trips_the_document() {
    let root = temp_root();
    let store = populated_store();

    let file_store = JsonFileSnapshotStore::open(root.as_str()).expect("open file store");
    file_store.save(store.state()).expect("save snapshot");

    let reopened = JsonFileSnapshotStore::open(root.as_str()).expect("reopen file store");
    let loaded = reopened.load().expect("load snapshot");
    assert_eq!(loaded.as_ref(), Some(store.state()));
}

#[rstest]
fn file_store_loads_none_when_no_snapshot_exists() {
    let root = temp_root();
    let file_store = JsonFileSnapshotStore::open(root.as_str()).expect("open file store");
    assert!(file_store.load().expect("load").is_none());
}

#[rstest]
fn corrupt_snapshot_falls_back_to_the_seeded_document() {
    let root = temp_root();
    std::fs::write(
        std::path::Path::new(&root).join(format!("{STORAGE_SLOT}.json")),
        "{ not json",
    )
    .expect("write corrupt snapshot");

    let file_store = JsonFileSnapshotStore::open(root.as_str()).expect("open file store");
    let store = BoardStore::open(file_store, SteppingClock::new()).expect("open store");

    assert!(store.boards().is_empty());
    assert_eq!(store.state().users().len(), 1);
}

#[rstest]
fn open_propagates_storage_failure() {
    let mut snapshots = MockSnapshotStore::new();
    snapshots
        .expect_load()
        .returning(|| Err(SnapshotError::storage(std::io::Error::other("medium gone"))));

    let result = BoardStore::open(snapshots, SteppingClock::new());
    assert!(matches!(result, Err(StoreError::Snapshot(_))));
}

#[rstest]
fn save_failure_surfaces_from_mutations() {
    let mut snapshots = MockSnapshotStore::new();
    snapshots.expect_load().returning(|| Ok(None));
    snapshots
        .expect_save()
        .returning(|_| Err(SnapshotError::storage(std::io::Error::other("disk full"))));

    let mut store = BoardStore::open(snapshots, SteppingClock::new()).expect("open store");
    let result = store.add_board(BoardDraft::new("Sprint 1", User::demo_id()));
    assert!(matches!(result, Err(StoreError::Snapshot(_))));
}
