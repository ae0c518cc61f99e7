//! Application services: the board store operation set and drag-and-drop
//! resolution.

pub mod drag;
pub mod store;

pub use drag::{DragCoordinator, DragItem, DropTarget, MoveCommand, resolve_drop};
pub use store::{BoardStore, StoreError, StoreResult};
