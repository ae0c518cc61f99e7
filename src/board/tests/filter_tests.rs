//! Filtering tests: the derived view never mutates stored data.

use rstest::{fixture, rstest};

use super::fixtures::{TestStore, sprint_board, test_store};
use crate::board::domain::{TaskDraft, TaskFilter, TaskPriority, User, UserId};

#[fixture]
fn store() -> TestStore {
    test_store()
}

#[rstest]
fn empty_filter_matches_everything(mut store: TestStore) {
    let (board_id, [todo, _, _]) = sprint_board(&mut store);
    store
        .add_task(TaskDraft::new(todo, "Write spec", User::demo_id()))
        .expect("add task");

    let columns = store.filtered_columns(board_id).expect("filtered view");
    let todo_view = columns.first().expect("todo view");
    assert_eq!(todo_view.tasks().len(), 1);
}

#[rstest]
#[case::title_match("write", true)]
#[case::case_insensitive("WRITE", true)]
#[case::description_match("ordering", true)]
#[case::no_match("deploy", false)]
fn query_matches_title_or_description(
    mut store: TestStore,
    #[case] query: &str,
    #[case] expected: bool,
) {
    let (_, [todo, _, _]) = sprint_board(&mut store);
    let id = store
        .add_task(
            TaskDraft::new(todo, "Write spec", User::demo_id())
                .with_description("cover ordering invariants"),
        )
        .expect("add task");

    let filter = TaskFilter::new().with_query(query);
    let task = store.find_task(id).expect("task present");
    assert_eq!(filter.matches(task), expected);
}

#[rstest]
fn priority_filter_excludes_other_priorities(mut store: TestStore) {
    let (_, [todo, _, _]) = sprint_board(&mut store);
    let high = store
        .add_task(
            TaskDraft::new(todo, "urgent", User::demo_id()).with_priority(TaskPriority::High),
        )
        .expect("high task");
    let low = store
        .add_task(TaskDraft::new(todo, "later", User::demo_id()).with_priority(TaskPriority::Low))
        .expect("low task");

    let filter = TaskFilter::new().with_priority(TaskPriority::High);
    assert!(filter.matches(store.find_task(high).expect("high")));
    assert!(!filter.matches(store.find_task(low).expect("low")));
}

#[rstest]
fn assignee_filter_excludes_unassigned_tasks(mut store: TestStore) {
    let (_, [todo, _, _]) = sprint_board(&mut store);
    let assignee = UserId::new();
    let assigned = store
        .add_task(TaskDraft::new(todo, "mine", User::demo_id()).assigned_to(assignee))
        .expect("assigned task");
    let unassigned = store
        .add_task(TaskDraft::new(todo, "nobody's", User::demo_id()))
        .expect("unassigned task");

    let filter = TaskFilter::new().with_assignee(assignee);
    assert!(filter.matches(store.find_task(assigned).expect("assigned")));
    assert!(!filter.matches(store.find_task(unassigned).expect("unassigned")));
}

#[rstest]
fn criteria_combine_with_and(mut store: TestStore) {
    let (_, [todo, _, _]) = sprint_board(&mut store);
    let id = store
        .add_task(
            TaskDraft::new(todo, "Write spec", User::demo_id()).with_priority(TaskPriority::High),
        )
        .expect("add task");
    let task = store.find_task(id).expect("task present");

    let matching = TaskFilter::new()
        .with_query("spec")
        .with_priority(TaskPriority::High);
    assert!(matching.matches(task));

    let wrong_priority = TaskFilter::new()
        .with_query("spec")
        .with_priority(TaskPriority::Low);
    assert!(!wrong_priority.matches(task));
}

#[rstest]
fn filtered_view_reflects_store_filters_without_mutating(mut store: TestStore) {
    let (board_id, [todo, _, _]) = sprint_board(&mut store);
    store
        .add_task(TaskDraft::new(todo, "Write spec", User::demo_id()))
        .expect("spec task");
    store
        .add_task(TaskDraft::new(todo, "Deploy site", User::demo_id()))
        .expect("deploy task");
    store.set_search_query("spec").expect("set query");
    let before = store.state().clone();

    let columns = store.filtered_columns(board_id).expect("filtered view");
    let todo_view = columns.first().expect("todo view");
    assert_eq!(todo_view.tasks().len(), 1);
    assert_eq!(
        todo_view.tasks().first().map(|task| task.title()),
        Some("Write spec")
    );

    drop(columns);
    assert_eq!(store.state(), &before);
    let stored = store
        .board(board_id)
        .expect("board")
        .column(todo)
        .expect("todo");
    assert_eq!(stored.tasks().len(), 2);
}
