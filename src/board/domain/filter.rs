//! Task filtering: a derived view over stored tasks.
//!
//! Filtering never mutates stored data. A task is visible iff the search
//! query is empty or matches its title or description case-insensitively,
//! AND each set filter field (priority, assignee) matches.

use super::{Column, Task, TaskPriority, UserId};

/// Filter criteria applied when deriving the visible task view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    query: String,
    priority: Option<TaskPriority>,
    assignee: Option<UserId>,
}

impl TaskFilter {
    /// Creates a filter that matches every task.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a filter from the stored scalar filter fields.
    #[must_use]
    pub const fn from_parts(
        query: String,
        priority: Option<TaskPriority>,
        assignee: Option<UserId>,
    ) -> Self {
        Self {
            query,
            priority,
            assignee,
        }
    }

    /// Sets the search query.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Restricts matches to one priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Restricts matches to one assignee.
    #[must_use]
    pub const fn with_assignee(mut self, assignee: UserId) -> Self {
        self.assignee = Some(assignee);
        self
    }

    /// Returns the search query.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns the priority restriction, if any.
    #[must_use]
    pub const fn priority(&self) -> Option<TaskPriority> {
        self.priority
    }

    /// Returns the assignee restriction, if any.
    #[must_use]
    pub const fn assignee(&self) -> Option<UserId> {
        self.assignee
    }

    /// Returns whether the task passes every filter criterion.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        let matches_query = self.query.is_empty() || {
            let needle = self.query.to_lowercase();
            task.title().to_lowercase().contains(&needle)
                || task.description().to_lowercase().contains(&needle)
        };
        let matches_priority = self
            .priority
            .is_none_or(|priority| task.priority() == priority);
        let matches_assignee = self
            .assignee
            .is_none_or(|assignee| task.assigned_to() == Some(assignee));
        matches_query && matches_priority && matches_assignee
    }

    /// Projects a column into its visible tasks.
    #[must_use]
    pub fn project<'a>(&self, column: &'a Column) -> FilteredColumn<'a> {
        FilteredColumn {
            column,
            tasks: column.tasks().iter().filter(|task| self.matches(task)).collect(),
        }
    }
}

/// A column paired with the tasks that pass the current filter, in stored
/// order. Borrowed from the store; never persisted.
#[derive(Debug, Clone)]
pub struct FilteredColumn<'a> {
    column: &'a Column,
    tasks: Vec<&'a Task>,
}

impl<'a> FilteredColumn<'a> {
    /// Returns the underlying column.
    #[must_use]
    pub const fn column(&self) -> &'a Column {
        self.column
    }

    /// Returns the visible tasks in display order.
    #[must_use]
    pub fn tasks(&self) -> &[&'a Task] {
        &self.tasks
    }
}
