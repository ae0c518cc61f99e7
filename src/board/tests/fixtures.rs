//! Shared fixtures and helpers for board tests.

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::board::adapters::InMemorySnapshotStore;
use crate::board::domain::{Board, BoardDraft, BoardId, Column, ColumnDraft, ColumnId, User};
use crate::board::services::BoardStore;

/// Clock that advances one second per reading, so successive mutations
/// get strictly increasing timestamps.
pub(super) struct SteppingClock {
    start: DateTime<Utc>,
    ticks: AtomicI64,
}

impl SteppingClock {
    pub(super) fn new() -> Self {
        Self {
            start: fixed_instant(),
            ticks: AtomicI64::new(0),
        }
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::Relaxed);
        self.start + Duration::seconds(tick)
    }
}

pub(super) fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
        .single()
        .expect("valid instant")
}

pub(super) type TestStore = BoardStore<InMemorySnapshotStore, SteppingClock>;

pub(super) fn test_store() -> TestStore {
    BoardStore::open(InMemorySnapshotStore::new(), SteppingClock::new()).expect("open store")
}

/// Creates "Sprint 1" with Todo, Doing, and Done columns.
pub(super) fn sprint_board(store: &mut TestStore) -> (BoardId, [ColumnId; 3]) {
    let board = store
        .add_board(BoardDraft::new("Sprint 1", User::demo_id()))
        .expect("add board");
    let todo = store
        .add_column(board, ColumnDraft::new("Todo"))
        .expect("add column");
    let doing = store
        .add_column(board, ColumnDraft::new("Doing"))
        .expect("add column");
    let done = store
        .add_column(board, ColumnDraft::new("Done"))
        .expect("add column");
    (board, [todo, doing, done])
}

pub(super) fn column_positions(board: &Board) -> Vec<usize> {
    board.columns().iter().map(Column::position).collect()
}

pub(super) fn task_positions(column: &Column) -> Vec<usize> {
    column.tasks().iter().map(|task| task.position()).collect()
}

pub(super) fn column_titles(board: &Board) -> Vec<&str> {
    board.columns().iter().map(Column::title).collect()
}
