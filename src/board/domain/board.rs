//! Board aggregate root: an ordered list of columns plus board metadata.

use super::{
    BoardId, BoardPriority, Column, ColumnDraft, ColumnId, DomainError, Task, TaskId, UserId,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A board holding ordered columns. Column array order is display order;
/// every column's `position` equals its array index after any mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    id: BoardId,
    name: String,
    description: String,
    created_by: UserId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    priority: BoardPriority,
    columns: Vec<Column>,
}

/// Payload for creating a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardDraft {
    name: String,
    description: String,
    priority: BoardPriority,
    created_by: UserId,
}

impl BoardDraft {
    /// Creates a draft with required fields. Description defaults to empty
    /// and priority to medium.
    #[must_use]
    pub fn new(name: impl Into<String>, created_by: UserId) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            priority: BoardPriority::default(),
            created_by,
        }
    }

    /// Sets the board description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the board priority label.
    #[must_use]
    pub const fn with_priority(mut self, priority: BoardPriority) -> Self {
        self.priority = priority;
        self
    }
}

/// Partial update merged into an existing board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardUpdate {
    name: Option<String>,
    description: Option<String>,
    priority: Option<BoardPriority>,
}

impl BoardUpdate {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the priority label.
    #[must_use]
    pub const fn with_priority(mut self, priority: BoardPriority) -> Self {
        self.priority = Some(priority);
        self
    }
}

impl Board {
    /// Creates an empty board from a draft.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyBoardName`] when the name is empty
    /// after trimming.
    pub fn new(draft: BoardDraft, clock: &impl Clock) -> Result<Self, DomainError> {
        if draft.name.trim().is_empty() {
            return Err(DomainError::EmptyBoardName);
        }
        let timestamp = clock.utc();
        Ok(Self {
            id: BoardId::new(),
            name: draft.name,
            description: draft.description,
            created_by: draft.created_by,
            created_at: timestamp,
            updated_at: timestamp,
            priority: draft.priority,
            columns: Vec::new(),
        })
    }

    /// Returns the board identifier.
    #[must_use]
    pub const fn id(&self) -> BoardId {
        self.id
    }

    /// Returns the board name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the board description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the creator.
    #[must_use]
    pub const fn created_by(&self) -> UserId {
        self.created_by
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

    /// Returns the board priority label.
    #[must_use]
    pub const fn priority(&self) -> BoardPriority {
        self.priority
    }

    /// Returns the columns in display order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the column with the given identifier, if present.
    #[must_use]
    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.iter().find(|column| column.id() == id)
    }

    /// Returns the array index of the column with the given identifier.
    #[must_use]
    pub fn column_index(&self, id: ColumnId) -> Option<usize> {
        self.columns.iter().position(|column| column.id() == id)
    }

    /// Returns whether the board holds the given column.
    #[must_use]
    pub fn contains_column(&self, id: ColumnId) -> bool {
        self.column(id).is_some()
    }

    /// Returns the task with the given identifier, searching all columns.
    #[must_use]
    pub fn find_task(&self, id: TaskId) -> Option<&Task> {
        self.columns.iter().find_map(|column| column.task(id))
    }

    /// Merges an update into this board and refreshes `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyBoardName`] when the update carries a
    /// name that is empty after trimming. The board is left unchanged in
    /// that case.
    pub fn apply(&mut self, update: BoardUpdate, clock: &impl Clock) -> Result<(), DomainError> {
        if let Some(name) = &update.name
            && name.trim().is_empty()
        {
            return Err(DomainError::EmptyBoardName);
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(priority) = update.priority {
            self.priority = priority;
        }
        self.touch(clock);
        Ok(())
    }

    /// Creates a column at the end of the column list and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyColumnTitle`] when the draft title is
    /// empty after trimming.
    pub(crate) fn append_column(&mut self, draft: ColumnDraft) -> Result<ColumnId, DomainError> {
        let column = Column::new(draft, self.id, self.columns.len())?;
        let id = column.id();
        self.columns.push(column);
        Ok(id)
    }

    /// Removes a column (and its tasks, implicitly) and renumbers the
    /// remaining columns.
    pub(crate) fn remove_column(&mut self, id: ColumnId) -> Option<Column> {
        let index = self.columns.iter().position(|column| column.id() == id)?;
        let column = self.columns.remove(index);
        self.renumber_columns();
        Some(column)
    }

    /// Moves the column at `from_index` to `to_index` (array move, not
    /// swap) and renumbers every column position to its array index.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ColumnIndexOutOfRange`] when either index is
    /// outside the column list. The board is left unchanged in that case.
    pub(crate) fn move_column(&mut self, from_index: usize, to_index: usize) -> Result<(), DomainError> {
        let len = self.columns.len();
        for index in [from_index, to_index] {
            if index >= len {
                return Err(DomainError::ColumnIndexOutOfRange { index, len });
            }
        }
        let column = self.columns.remove(from_index);
        self.columns.insert(to_index, column);
        self.renumber_columns();
        Ok(())
    }

    pub(crate) fn column_mut(&mut self, id: ColumnId) -> Option<&mut Column> {
        self.columns.iter_mut().find(|column| column.id() == id)
    }

    pub(crate) fn column_containing_task_mut(&mut self, id: TaskId) -> Option<&mut Column> {
        self.columns.iter_mut().find(|column| column.contains_task(id))
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    pub(crate) fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }

    fn renumber_columns(&mut self) {
        for (index, column) in self.columns.iter_mut().enumerate() {
            column.set_position(index);
        }
    }
}
