//! The persisted board document.

use super::{Board, BoardId, Column, ColumnId, Task, TaskFilter, TaskId, TaskPriority, User, UserId};
use serde::{Deserialize, Serialize};

/// The whole store document: all boards, known users, and the current
/// filter scalars. Serialised as one JSON document under a fixed slot
/// name; load(save(S)) round-trips any valid state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardState {
    boards: Vec<Board>,
    users: Vec<User>,
    search_query: String,
    filter_priority: Option<TaskPriority>,
    filter_assignee: Option<UserId>,
}

impl BoardState {
    /// Returns the fresh document a new session starts from: no boards,
    /// the fixed demo user, empty filters.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            boards: Vec::new(),
            users: vec![User::demo()],
            search_query: String::new(),
            filter_priority: None,
            filter_assignee: None,
        }
    }

    /// Returns the boards in creation order.
    #[must_use]
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Returns the known users.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Returns the user with the given identifier, if known.
    #[must_use]
    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id() == id)
    }

    /// Returns the current search query.
    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Returns the current priority filter, if set.
    #[must_use]
    pub const fn filter_priority(&self) -> Option<TaskPriority> {
        self.filter_priority
    }

    /// Returns the current assignee filter, if set.
    #[must_use]
    pub const fn filter_assignee(&self) -> Option<UserId> {
        self.filter_assignee
    }

    /// Builds the filter the presentation layer applies to task lists.
    #[must_use]
    pub fn filter(&self) -> TaskFilter {
        TaskFilter::from_parts(
            self.search_query.clone(),
            self.filter_priority,
            self.filter_assignee,
        )
    }

    /// Returns the board with the given identifier, if present.
    #[must_use]
    pub fn board(&self, id: BoardId) -> Option<&Board> {
        self.boards.iter().find(|board| board.id() == id)
    }

    /// Returns the board holding the given column, if any.
    #[must_use]
    pub fn board_containing_column(&self, id: ColumnId) -> Option<&Board> {
        self.boards.iter().find(|board| board.contains_column(id))
    }

    /// Returns the board holding the given task, if any.
    #[must_use]
    pub fn board_containing_task(&self, id: TaskId) -> Option<&Board> {
        self.boards.iter().find(|board| board.find_task(id).is_some())
    }

    /// Returns the column with the given identifier, searching all boards.
    #[must_use]
    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.boards.iter().find_map(|board| board.column(id))
    }

    /// Returns the task with the given identifier, searching all boards.
    #[must_use]
    pub fn find_task(&self, id: TaskId) -> Option<&Task> {
        self.boards.iter().find_map(|board| board.find_task(id))
    }

    pub(crate) fn push_board(&mut self, board: Board) {
        self.boards.push(board);
    }

    pub(crate) fn remove_board(&mut self, id: BoardId) -> Option<Board> {
        let index = self.boards.iter().position(|board| board.id() == id)?;
        Some(self.boards.remove(index))
    }

    pub(crate) fn board_mut(&mut self, id: BoardId) -> Option<&mut Board> {
        self.boards.iter_mut().find(|board| board.id() == id)
    }

    pub(crate) fn board_containing_column_mut(&mut self, id: ColumnId) -> Option<&mut Board> {
        self.boards.iter_mut().find(|board| board.contains_column(id))
    }

    pub(crate) fn board_containing_task_mut(&mut self, id: TaskId) -> Option<&mut Board> {
        self.boards
            .iter_mut()
            .find(|board| board.find_task(id).is_some())
    }

    pub(crate) fn set_search_query(&mut self, query: String) {
        self.search_query = query;
    }

    pub(crate) const fn set_filter_priority(&mut self, priority: Option<TaskPriority>) {
        self.filter_priority = priority;
    }

    pub(crate) const fn set_filter_assignee(&mut self, assignee: Option<UserId>) {
        self.filter_assignee = assignee;
    }
}
