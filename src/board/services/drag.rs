//! Drag-and-drop resolution.
//!
//! Drag-and-drop is a synchronous two-event contract: the dragged entity
//! is captured at drag start, and at drag end the drop target resolves to
//! at most one store call. No in-progress state is persisted during the
//! gesture.

use super::store::{BoardStore, StoreResult};
use crate::board::domain::{BoardId, BoardState, ColumnId, TaskId};
use crate::board::ports::SnapshotStore;
use mockable::Clock;

/// The entity captured at drag start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragItem {
    /// A column being reordered within its board.
    Column(ColumnId),
    /// A task being moved.
    Task(TaskId),
}

/// The entity under the pointer at drag end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    /// Dropped onto a column surface.
    Column(ColumnId),
    /// Dropped onto another task.
    Task(TaskId),
}

/// The single store call a completed drag resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveCommand {
    /// Reorder a column within its board.
    Column {
        /// The board whose columns are reordered.
        board_id: BoardId,
        /// Current array index of the dragged column.
        from_index: usize,
        /// Array index of the column it was dropped on.
        to_index: usize,
    },
    /// Move a task to a column position.
    Task {
        /// The dragged task.
        task_id: TaskId,
        /// The destination column.
        column_id: ColumnId,
        /// The destination position within that column.
        position: usize,
    },
}

/// Resolves a drop into at most one move command against the current
/// snapshot. Indices and positions are only valid against that snapshot,
/// so resolution happens immediately before the store call.
///
/// Returns `None` when the drop changes nothing: same column index, same
/// task position, a column dropped on a task, or an id that no longer
/// resolves.
#[must_use]
pub fn resolve_drop(state: &BoardState, item: DragItem, target: DropTarget) -> Option<MoveCommand> {
    match (item, target) {
        (DragItem::Column(active), DropTarget::Column(over)) => {
            let board = state.board_containing_column(active)?;
            let from_index = board.column_index(active)?;
            let to_index = board.column_index(over)?;
            (from_index != to_index).then_some(MoveCommand::Column {
                board_id: board.id(),
                from_index,
                to_index,
            })
        }
        (DragItem::Column(_), DropTarget::Task(_)) => None,
        (DragItem::Task(active), over) => {
            let task = state.find_task(active)?;
            let (column_id, position) = match over {
                // Dropping onto a column appends to it.
                DropTarget::Column(column_id) => {
                    let column = state.column(column_id)?;
                    (column_id, column.tasks().len())
                }
                // Dropping onto a task inserts at that task's position.
                DropTarget::Task(over_task_id) => {
                    let over_task = state.find_task(over_task_id)?;
                    (over_task.column_id(), over_task.position())
                }
            };
            (column_id != task.column_id() || position != task.position()).then_some(
                MoveCommand::Task {
                    task_id: active,
                    column_id,
                    position,
                },
            )
        }
    }
}

/// Holds the entity captured at drag start and commits the resulting move
/// at drag end.
#[derive(Debug, Clone, Default)]
pub struct DragCoordinator {
    active: Option<DragItem>,
}

impl DragCoordinator {
    /// Creates a coordinator with no active drag.
    #[must_use]
    pub const fn new() -> Self {
        Self { active: None }
    }

    /// Captures the dragged entity. A capture left over from an abandoned
    /// gesture is replaced.
    pub const fn begin(&mut self, item: DragItem) {
        self.active = Some(item);
    }

    /// Returns the entity currently being dragged, if any.
    #[must_use]
    pub const fn active(&self) -> Option<DragItem> {
        self.active
    }

    /// Drops the capture without issuing a store call.
    pub const fn cancel(&mut self) {
        self.active = None;
    }

    /// Completes the gesture: resolves the drop against the store's
    /// current snapshot and issues at most one move operation. Returns the
    /// committed command, or `None` when the gesture was a no-op (no
    /// capture, no target, or an unchanged position).
    ///
    /// # Errors
    ///
    /// Propagates [`super::StoreError`] from the issued move operation.
    pub fn complete<S, C>(
        &mut self,
        store: &mut BoardStore<S, C>,
        target: Option<DropTarget>,
    ) -> StoreResult<Option<MoveCommand>>
    where
        S: SnapshotStore,
        C: Clock,
    {
        let Some(item) = self.active.take() else {
            return Ok(None);
        };
        let Some(over) = target else {
            return Ok(None);
        };
        let Some(command) = resolve_drop(store.state(), item, over) else {
            return Ok(None);
        };
        match command {
            MoveCommand::Column {
                board_id,
                from_index,
                to_index,
            } => store.move_column(board_id, from_index, to_index)?,
            MoveCommand::Task {
                task_id,
                column_id,
                position,
            } => store.move_task(task_id, column_id, position)?,
        }
        Ok(Some(command))
    }
}
