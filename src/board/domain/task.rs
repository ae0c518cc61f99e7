//! Task records and their creation/update payloads.

use super::{ColumnId, DomainError, TaskId, TaskPriority, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A task card. Owned by exactly one column at a time; `column_id` is the
/// source of truth for containment and must agree with the containing
/// column's task list after every mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    priority: TaskPriority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    due_date: Option<DateTime<Utc>>,
    created_by: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    assigned_to: Option<UserId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    column_id: ColumnId,
    position: usize,
}

/// Payload for creating a task inside a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    column_id: ColumnId,
    title: String,
    description: String,
    priority: TaskPriority,
    due_date: Option<DateTime<Utc>>,
    created_by: UserId,
    assigned_to: Option<UserId>,
}

impl TaskDraft {
    /// Creates a draft with required fields. Description defaults to empty
    /// and priority to medium, matching the creation form defaults.
    #[must_use]
    pub fn new(column_id: ColumnId, title: impl Into<String>, created_by: UserId) -> Self {
        Self {
            column_id,
            title: title.into(),
            description: String::new(),
            priority: TaskPriority::default(),
            due_date: None,
            created_by,
            assigned_to: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the task priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the assignee.
    #[must_use]
    pub const fn assigned_to(mut self, user: UserId) -> Self {
        self.assigned_to = Some(user);
        self
    }

    /// Returns the owning column identifier.
    #[must_use]
    pub const fn column_id(&self) -> ColumnId {
        self.column_id
    }
}

/// Partial update merged into an existing task. Unset fields are left
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskUpdate {
    title: Option<String>,
    description: Option<String>,
    priority: Option<TaskPriority>,
    due_date: Option<Option<DateTime<Utc>>>,
    assigned_to: Option<Option<UserId>>,
}

impl TaskUpdate {
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

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Replaces the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(Some(due_date));
        self
    }

    /// Clears the due date.
    #[must_use]
    pub const fn clear_due_date(mut self) -> Self {
        self.due_date = Some(None);
        self
    }

    /// Replaces the assignee.
    #[must_use]
    pub const fn assign_to(mut self, user: UserId) -> Self {
        self.assigned_to = Some(Some(user));
        self
    }

    /// Clears the assignee.
    #[must_use]
    pub const fn clear_assignee(mut self) -> Self {
        self.assigned_to = Some(None);
        self
    }
}

impl Task {
    /// Creates a task from a draft at the given position within its column.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyTaskTitle`] when the title is empty
    /// after trimming.
    pub fn new(draft: TaskDraft, position: usize, clock: &impl Clock) -> Result<Self, DomainError> {
        if draft.title.trim().is_empty() {
            return Err(DomainError::EmptyTaskTitle);
        }
        let timestamp = clock.utc();
        Ok(Self {
            id: TaskId::new(),
            title: draft.title,
            description: draft.description,
            priority: draft.priority,
            due_date: draft.due_date,
            created_by: draft.created_by,
            assigned_to: draft.assigned_to,
            created_at: timestamp,
            updated_at: timestamp,
            column_id: draft.column_id,
            position,
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the creator.
    #[must_use]
    pub const fn created_by(&self) -> UserId {
        self.created_by
    }

    /// Returns the assignee, if any.
    #[must_use]
    pub const fn assigned_to(&self) -> Option<UserId> {
        self.assigned_to
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the owning column identifier.
    #[must_use]
    pub const fn column_id(&self) -> ColumnId {
        self.column_id
    }

    /// Returns the dense zero-based position within the owning column.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Merges an update into this task and refreshes `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyTaskTitle`] when the update carries a
    /// title that is empty after trimming. The task is left unchanged in
    /// that case.
    pub fn apply(&mut self, update: TaskUpdate, clock: &impl Clock) -> Result<(), DomainError> {
        if let Some(title) = &update.title
            && title.trim().is_empty()
        {
            return Err(DomainError::EmptyTaskTitle);
        }
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(priority) = update.priority {
            self.priority = priority;
        }
        if let Some(due_date) = update.due_date {
            self.due_date = due_date;
        }
        if let Some(assigned_to) = update.assigned_to {
            self.assigned_to = assigned_to;
        }
        self.updated_at = clock.utc();
        Ok(())
    }

    /// Rewrites ownership when the task is moved between columns.
    pub(crate) const fn relocate(&mut self, column_id: ColumnId, position: usize) {
        self.column_id = column_id;
        self.position = position;
    }

    /// Rewrites the position after its column is renumbered.
    pub(crate) const fn set_position(&mut self, position: usize) {
        self.position = position;
    }
}
