//! Columns: ordered task lists within a board.

use super::{BoardId, ColumnId, DomainError, Task, TaskId};
use serde::{Deserialize, Serialize};

/// A column of tasks. Owned by exactly one board, never reassigned.
///
/// Invariant: the `position` values of the tasks held here are exactly
/// `0..n-1` in array order, and every task's `column_id` matches this
/// column. Every mutation path restores both properties before returning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    id: ColumnId,
    title: String,
    board_id: BoardId,
    position: usize,
    tasks: Vec<Task>,
}

/// Payload for creating a column inside a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDraft {
    title: String,
}

impl ColumnDraft {
    /// Creates a draft with the column title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// Partial update merged into an existing column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnUpdate {
    title: Option<String>,
}

impl ColumnUpdate {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl Column {
    /// Creates an empty column at the given position within its board.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyColumnTitle`] when the title is empty
    /// after trimming.
    pub fn new(draft: ColumnDraft, board_id: BoardId, position: usize) -> Result<Self, DomainError> {
        if draft.title.trim().is_empty() {
            return Err(DomainError::EmptyColumnTitle);
        }
        Ok(Self {
            id: ColumnId::new(),
            title: draft.title,
            board_id,
            position,
            tasks: Vec::new(),
        })
    }

    /// Returns the column identifier.
    #[must_use]
    pub const fn id(&self) -> ColumnId {
        self.id
    }

    /// Returns the column title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the owning board identifier.
    #[must_use]
    pub const fn board_id(&self) -> BoardId {
        self.board_id
    }

    /// Returns the dense zero-based position within the owning board.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns the tasks in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the task with the given identifier, if present.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns whether the column holds the given task.
    #[must_use]
    pub fn contains_task(&self, id: TaskId) -> bool {
        self.task(id).is_some()
    }

    /// Merges an update into this column.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyColumnTitle`] when the update carries a
    /// title that is empty after trimming.
    pub fn apply(&mut self, update: ColumnUpdate) -> Result<(), DomainError> {
        if let Some(title) = update.title {
            if title.trim().is_empty() {
                return Err(DomainError::EmptyColumnTitle);
            }
            self.title = title;
        }
        Ok(())
    }

    pub(crate) fn task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id() == id)
    }

    /// Appends a task that was created with `position == tasks.len()`.
    pub(crate) fn push_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Inserts a task at the given index (clamped to the current length),
    /// rewriting its ownership and renumbering the whole list.
    pub(crate) fn insert_task(&mut self, mut task: Task, index: usize) {
        let slot = index.min(self.tasks.len());
        task.relocate(self.id, slot);
        self.tasks.insert(slot, task);
        self.renumber_tasks();
    }

    /// Removes a task by id and renumbers the remaining tasks.
    pub(crate) fn remove_task(&mut self, id: TaskId) -> Option<Task> {
        let index = self.tasks.iter().position(|task| task.id() == id)?;
        let task = self.tasks.remove(index);
        self.renumber_tasks();
        Some(task)
    }

    /// Rewrites every task position to its array index.
    pub(crate) fn renumber_tasks(&mut self) {
        for (index, task) in self.tasks.iter_mut().enumerate() {
            task.set_position(index);
        }
    }

    pub(crate) const fn set_position(&mut self, position: usize) {
        self.position = position;
    }
}
