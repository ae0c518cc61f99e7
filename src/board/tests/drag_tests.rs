//! Drag-and-drop resolution tests: every gesture resolves to at most one
//! store call.

use rstest::{fixture, rstest};

use super::fixtures::{TestStore, column_titles, sprint_board, test_store};
use crate::board::domain::{ColumnId, TaskDraft, TaskId, User};
use crate::board::services::{DragCoordinator, DragItem, DropTarget, MoveCommand, resolve_drop};

#[fixture]
fn store() -> TestStore {
    test_store()
}

#[rstest]
fn column_over_column_resolves_to_index_move(mut store: TestStore) {
    let (board_id, [todo, _, done]) = sprint_board(&mut store);

    let command = resolve_drop(
        store.state(),
        DragItem::Column(todo),
        DropTarget::Column(done),
    );

    assert_eq!(
        command,
        Some(MoveCommand::Column {
            board_id,
            from_index: 0,
            to_index: 2,
        })
    );
}

#[rstest]
fn column_over_itself_resolves_to_nothing(mut store: TestStore) {
    let (_, [todo, _, _]) = sprint_board(&mut store);
    let command = resolve_drop(
        store.state(),
        DragItem::Column(todo),
        DropTarget::Column(todo),
    );
    assert!(command.is_none());
}

#[rstest]
fn column_over_task_resolves_to_nothing(mut store: TestStore) {
    let (_, [todo, doing, _]) = sprint_board(&mut store);
    let task = store
        .add_task(TaskDraft::new(doing, "Write spec", User::demo_id()))
        .expect("add task");

    let command = resolve_drop(store.state(), DragItem::Column(todo), DropTarget::Task(task));
    assert!(command.is_none());
}

// Dropping a task onto a column appends it: position = current length.
#[rstest]
fn task_over_column_appends(mut store: TestStore) {
    let (_, [todo, doing, _]) = sprint_board(&mut store);
    let dragged = store
        .add_task(TaskDraft::new(todo, "Write spec", User::demo_id()))
        .expect("dragged task");
    store
        .add_task(TaskDraft::new(doing, "Review spec", User::demo_id()))
        .expect("existing task");

    let command = resolve_drop(
        store.state(),
        DragItem::Task(dragged),
        DropTarget::Column(doing),
    );

    assert_eq!(
        command,
        Some(MoveCommand::Task {
            task_id: dragged,
            column_id: doing,
            position: 1,
        })
    );
}

// Dropping a task onto another task inserts at that task's position.
#[rstest]
fn task_over_task_takes_its_position(mut store: TestStore) {
    let (_, [todo, doing, _]) = sprint_board(&mut store);
    let dragged = store
        .add_task(TaskDraft::new(todo, "Write spec", User::demo_id()))
        .expect("dragged task");
    store
        .add_task(TaskDraft::new(doing, "a", User::demo_id()))
        .expect("task a");
    let over = store
        .add_task(TaskDraft::new(doing, "b", User::demo_id()))
        .expect("task b");

    let command = resolve_drop(
        store.state(),
        DragItem::Task(dragged),
        DropTarget::Task(over),
    );

    assert_eq!(
        command,
        Some(MoveCommand::Task {
            task_id: dragged,
            column_id: doing,
            position: 1,
        })
    );
}

#[rstest]
fn task_over_itself_resolves_to_nothing(mut store: TestStore) {
    let (_, [todo, _, _]) = sprint_board(&mut store);
    let task = store
        .add_task(TaskDraft::new(todo, "Write spec", User::demo_id()))
        .expect("add task");

    let command = resolve_drop(store.state(), DragItem::Task(task), DropTarget::Task(task));
    assert!(command.is_none());
}

#[rstest]
fn unresolvable_ids_resolve_to_nothing(mut store: TestStore) {
    let (_, [todo, _, _]) = sprint_board(&mut store);
    let task = store
        .add_task(TaskDraft::new(todo, "Write spec", User::demo_id()))
        .expect("add task");

    assert!(
        resolve_drop(
            store.state(),
            DragItem::Task(TaskId::new()),
            DropTarget::Column(todo),
        )
        .is_none()
    );
    assert!(
        resolve_drop(
            store.state(),
            DragItem::Task(task),
            DropTarget::Column(ColumnId::new()),
        )
        .is_none()
    );
}

#[rstest]
fn coordinator_commits_a_task_move(mut store: TestStore) {
    let (board_id, [todo, doing, _]) = sprint_board(&mut store);
    let task = store
        .add_task(TaskDraft::new(todo, "Write spec", User::demo_id()))
        .expect("add task");

    let mut coordinator = DragCoordinator::new();
    coordinator.begin(DragItem::Task(task));
    let committed = coordinator
        .complete(&mut store, Some(DropTarget::Column(doing)))
        .expect("complete drag");

    assert_eq!(
        committed,
        Some(MoveCommand::Task {
            task_id: task,
            column_id: doing,
            position: 0,
        })
    );
    let board = store.board(board_id).expect("board");
    assert!(board.column(doing).expect("doing").contains_task(task));
    assert!(coordinator.active().is_none());
}

#[rstest]
fn coordinator_commits_a_column_move(mut store: TestStore) {
    let (board_id, [todo, _, done]) = sprint_board(&mut store);

    let mut coordinator = DragCoordinator::new();
    coordinator.begin(DragItem::Column(todo));
    let committed = coordinator
        .complete(&mut store, Some(DropTarget::Column(done)))
        .expect("complete drag");

    assert!(matches!(committed, Some(MoveCommand::Column { .. })));
    let board = store.board(board_id).expect("board");
    assert_eq!(column_titles(board), vec!["Doing", "Done", "Todo"]);
}

#[rstest]
fn coordinator_without_target_commits_nothing(mut store: TestStore) {
    let (_, [todo, _, _]) = sprint_board(&mut store);
    let before = store.state().clone();

    let mut coordinator = DragCoordinator::new();
    coordinator.begin(DragItem::Column(todo));
    let committed = coordinator.complete(&mut store, None).expect("complete drag");

    assert!(committed.is_none());
    assert!(coordinator.active().is_none());
    assert_eq!(store.state(), &before);
}

#[rstest]
fn coordinator_without_capture_commits_nothing(mut store: TestStore) {
    let (_, [todo, _, _]) = sprint_board(&mut store);

    let mut coordinator = DragCoordinator::new();
    let committed = coordinator
        .complete(&mut store, Some(DropTarget::Column(todo)))
        .expect("complete drag");

    assert!(committed.is_none());
}

#[rstest]
fn cancel_drops_the_capture(mut store: TestStore) {
    let (_, [todo, _, _]) = sprint_board(&mut store);

    let mut coordinator = DragCoordinator::new();
    coordinator.begin(DragItem::Column(todo));
    coordinator.cancel();

    assert!(coordinator.active().is_none());
}
