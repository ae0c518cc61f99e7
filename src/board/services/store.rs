//! The board store: the single sanctioned mutation surface.
//!
//! One instance exists per running session. Every operation runs to
//! completion synchronously, either applies fully or leaves state
//! untouched, and persists the whole document through the snapshot port
//! after each successful mutation. Presentation code never mutates the
//! nested board arrays directly.

use crate::board::domain::{
    Board, BoardDraft, BoardId, BoardState, BoardUpdate, ColumnDraft, ColumnId, ColumnUpdate,
    DomainError, FilteredColumn, Task, TaskDraft, TaskFilter, TaskId, TaskPriority, TaskUpdate,
    UserId,
};
use crate::board::ports::{SnapshotError, SnapshotStore};
use mockable::Clock;
use thiserror::Error;
use tracing::debug;

/// Result type for board store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors returned by board store operations.
///
/// Lookup failures leave state untouched; callers that want the original
/// silent no-op behaviour can discard the error.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Snapshot persistence failed.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    /// No board matches the given identifier.
    #[error("board not found: {0}")]
    BoardNotFound(BoardId),

    /// No column matches the given identifier.
    #[error("column not found: {0}")]
    ColumnNotFound(ColumnId),

    /// No task matches the given identifier.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
}

/// The board state container.
///
/// Generic over the snapshot port and the clock so tests can pin both.
#[derive(Debug)]
pub struct BoardStore<S, C>
where
    S: SnapshotStore,
    C: Clock,
{
    state: BoardState,
    snapshots: S,
    clock: C,
}

impl<S, C> BoardStore<S, C>
where
    S: SnapshotStore,
    C: Clock,
{
    /// Opens a store from the snapshot slot, seeding the default document
    /// (no boards, the demo user, empty filters) when no usable snapshot
    /// exists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Snapshot`] when the storage medium fails. A
    /// missing or undecodable document is not an error.
    pub fn open(snapshots: S, clock: C) -> StoreResult<Self> {
        let state = snapshots.load()?.unwrap_or_else(BoardState::seeded);
        Ok(Self {
            state,
            snapshots,
            clock,
        })
    }

    /// Returns the current document.
    #[must_use]
    pub const fn state(&self) -> &BoardState {
        &self.state
    }

    /// Returns the boards in creation order.
    #[must_use]
    pub fn boards(&self) -> &[Board] {
        self.state.boards()
    }

    /// Returns the board with the given identifier, if present.
    #[must_use]
    pub fn board(&self, id: BoardId) -> Option<&Board> {
        self.state.board(id)
    }

    /// Returns the task with the given identifier, searching all boards.
    #[must_use]
    pub fn find_task(&self, id: TaskId) -> Option<&Task> {
        self.state.find_task(id)
    }

    /// Returns the filter built from the stored filter scalars.
    #[must_use]
    pub fn filter(&self) -> TaskFilter {
        self.state.filter()
    }

    /// Returns the board's columns with only the tasks passing the current
    /// filter: the view the presentation layer renders.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::BoardNotFound`] when the board does not exist.
    pub fn filtered_columns(&self, board_id: BoardId) -> StoreResult<Vec<FilteredColumn<'_>>> {
        let board = self
            .state
            .board(board_id)
            .ok_or(StoreError::BoardNotFound(board_id))?;
        let filter = self.state.filter();
        Ok(board
            .columns()
            .iter()
            .map(|column| filter.project(column))
            .collect())
    }

    /// Creates a board and appends it to the board list. Board names need
    /// not be unique.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Domain`] on an empty name and
    /// [`StoreError::Snapshot`] when persistence fails.
    pub fn add_board(&mut self, draft: BoardDraft) -> StoreResult<BoardId> {
        let board = Board::new(draft, &self.clock)?;
        let id = board.id();
        self.state.push_board(board);
        self.persist()?;
        debug!(board = %id, "board created");
        Ok(id)
    }

    /// Merges an update into the board and refreshes its `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::BoardNotFound`] when the id does not resolve.
    pub fn update_board(&mut self, id: BoardId, update: BoardUpdate) -> StoreResult<()> {
        let board = self
            .state
            .board_mut(id)
            .ok_or(StoreError::BoardNotFound(id))?;
        board.apply(update, &self.clock)?;
        self.persist()
    }

    /// Deletes the board; its columns and tasks go with it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::BoardNotFound`] when the id does not resolve.
    pub fn delete_board(&mut self, id: BoardId) -> StoreResult<()> {
        self.state
            .remove_board(id)
            .ok_or(StoreError::BoardNotFound(id))?;
        self.persist()?;
        debug!(board = %id, "board deleted");
        Ok(())
    }

    /// Creates a column at the end of the board's column list (position =
    /// current column count) and refreshes the board's `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::BoardNotFound`] when the board id does not
    /// resolve and [`StoreError::Domain`] on an empty title.
    pub fn add_column(&mut self, board_id: BoardId, draft: ColumnDraft) -> StoreResult<ColumnId> {
        let board = self
            .state
            .board_mut(board_id)
            .ok_or(StoreError::BoardNotFound(board_id))?;
        let id = board.append_column(draft)?;
        board.touch(&self.clock);
        self.persist()?;
        Ok(id)
    }

    /// Merges an update into the column and refreshes the owning board's
    /// `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ColumnNotFound`] when the id does not resolve.
    pub fn update_column(&mut self, column_id: ColumnId, update: ColumnUpdate) -> StoreResult<()> {
        let board = self
            .state
            .board_containing_column_mut(column_id)
            .ok_or(StoreError::ColumnNotFound(column_id))?;
        let column = board
            .column_mut(column_id)
            .ok_or(StoreError::ColumnNotFound(column_id))?;
        column.apply(update)?;
        board.touch(&self.clock);
        self.persist()
    }

    /// Deletes the column and its tasks, renumbers the remaining columns,
    /// and refreshes the owning board's `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ColumnNotFound`] when the id does not resolve.
    pub fn delete_column(&mut self, column_id: ColumnId) -> StoreResult<()> {
        let board = self
            .state
            .board_containing_column_mut(column_id)
            .ok_or(StoreError::ColumnNotFound(column_id))?;
        board
            .remove_column(column_id)
            .ok_or(StoreError::ColumnNotFound(column_id))?;
        board.touch(&self.clock);
        self.persist()
    }

    /// Moves the column at `from_index` to `to_index` within the board
    /// (array move, not swap) and renumbers every column. Indices are
    /// caller-resolved against the current snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::BoardNotFound`] when the board id does not
    /// resolve and [`StoreError::Domain`] when either index is out of
    /// range.
    pub fn move_column(
        &mut self,
        board_id: BoardId,
        from_index: usize,
        to_index: usize,
    ) -> StoreResult<()> {
        let board = self
            .state
            .board_mut(board_id)
            .ok_or(StoreError::BoardNotFound(board_id))?;
        board.move_column(from_index, to_index)?;
        board.touch(&self.clock);
        self.persist()?;
        debug!(board = %board_id, from_index, to_index, "column moved");
        Ok(())
    }

    /// Creates a task at the end of its column's task list (position =
    /// current task count) and refreshes the owning board's `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ColumnNotFound`] when the draft's column id
    /// does not resolve and [`StoreError::Domain`] on an empty title.
    pub fn add_task(&mut self, draft: TaskDraft) -> StoreResult<TaskId> {
        let column_id = draft.column_id();
        let board = self
            .state
            .board_containing_column_mut(column_id)
            .ok_or(StoreError::ColumnNotFound(column_id))?;
        let column = board
            .column_mut(column_id)
            .ok_or(StoreError::ColumnNotFound(column_id))?;
        let task = Task::new(draft, column.tasks().len(), &self.clock)?;
        let id = task.id();
        column.push_task(task);
        board.touch(&self.clock);
        self.persist()?;
        debug!(task = %id, column = %column_id, "task created");
        Ok(id)
    }

    /// Merges an update into the task wherever it lives and refreshes the
    /// task's and the owning board's `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TaskNotFound`] when the id does not resolve.
    pub fn update_task(&mut self, task_id: TaskId, update: TaskUpdate) -> StoreResult<()> {
        let board = self
            .state
            .board_containing_task_mut(task_id)
            .ok_or(StoreError::TaskNotFound(task_id))?;
        let column = board
            .column_containing_task_mut(task_id)
            .ok_or(StoreError::TaskNotFound(task_id))?;
        let task = column
            .task_mut(task_id)
            .ok_or(StoreError::TaskNotFound(task_id))?;
        task.apply(update, &self.clock)?;
        board.touch(&self.clock);
        self.persist()
    }

    /// Removes the task from its column and renumbers the remaining tasks.
    /// The board timestamp is left alone, matching the deletion paths of
    /// the presentation contract.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TaskNotFound`] when the id does not resolve.
    pub fn delete_task(&mut self, task_id: TaskId) -> StoreResult<()> {
        let board = self
            .state
            .board_containing_task_mut(task_id)
            .ok_or(StoreError::TaskNotFound(task_id))?;
        let column = board
            .column_containing_task_mut(task_id)
            .ok_or(StoreError::TaskNotFound(task_id))?;
        column
            .remove_task(task_id)
            .ok_or(StoreError::TaskNotFound(task_id))?;
        self.persist()
    }

    /// Moves a task to `new_column_id` at `new_position` (clamped to the
    /// destination length). The task is removed from whichever column
    /// holds it, both source and destination are renumbered, the task's
    /// `column_id` is rewritten, and the destination board's `updated_at`
    /// is refreshed. The destination is validated before removal, so a
    /// bad target leaves state untouched.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ColumnNotFound`] when the destination column
    /// does not resolve and [`StoreError::TaskNotFound`] when the task
    /// does not.
    pub fn move_task(
        &mut self,
        task_id: TaskId,
        new_column_id: ColumnId,
        new_position: usize,
    ) -> StoreResult<()> {
        if self.state.column(new_column_id).is_none() {
            return Err(StoreError::ColumnNotFound(new_column_id));
        }
        let source_board = self
            .state
            .board_containing_task_mut(task_id)
            .ok_or(StoreError::TaskNotFound(task_id))?;
        let source_column = source_board
            .column_containing_task_mut(task_id)
            .ok_or(StoreError::TaskNotFound(task_id))?;
        let task = source_column
            .remove_task(task_id)
            .ok_or(StoreError::TaskNotFound(task_id))?;

        // Destination existence was checked above; the task cannot be lost.
        let dest_board = self
            .state
            .board_containing_column_mut(new_column_id)
            .ok_or(StoreError::ColumnNotFound(new_column_id))?;
        let dest_column = dest_board
            .column_mut(new_column_id)
            .ok_or(StoreError::ColumnNotFound(new_column_id))?;
        dest_column.insert_task(task, new_position);
        dest_board.touch(&self.clock);
        self.persist()?;
        debug!(task = %task_id, column = %new_column_id, position = new_position, "task moved");
        Ok(())
    }

    /// Replaces the search query.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Snapshot`] when persistence fails.
    pub fn set_search_query(&mut self, query: impl Into<String>) -> StoreResult<()> {
        self.state.set_search_query(query.into());
        self.persist()
    }

    /// Replaces the priority filter; `None` clears it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Snapshot`] when persistence fails.
    pub fn set_filter_priority(&mut self, priority: Option<TaskPriority>) -> StoreResult<()> {
        self.state.set_filter_priority(priority);
        self.persist()
    }

    /// Replaces the assignee filter; `None` clears it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Snapshot`] when persistence fails.
    pub fn set_filter_assignee(&mut self, assignee: Option<UserId>) -> StoreResult<()> {
        self.state.set_filter_assignee(assignee);
        self.persist()
    }

    fn persist(&self) -> StoreResult<()> {
        self.snapshots.save(&self.state)?;
        Ok(())
    }
}
