//! Domain model for the Kanban board hierarchy.
//!
//! The board domain models boards, their ordered columns, and the tasks
//! within those columns, together with the dense positional ordering
//! invariants every mutation must restore, while keeping all
//! infrastructure concerns outside of the domain boundary.

mod board;
mod column;
mod error;
mod filter;
mod ids;
mod priority;
mod state;
mod task;
mod user;

pub use board::{Board, BoardDraft, BoardUpdate};
pub use column::{Column, ColumnDraft, ColumnUpdate};
pub use error::{DomainError, ParsePriorityError};
pub use filter::{FilteredColumn, TaskFilter};
pub use ids::{BoardId, ColumnId, TaskId, UserId};
pub use priority::{BoardPriority, TaskPriority};
pub use state::BoardState;
pub use task::{Task, TaskDraft, TaskUpdate};
pub use user::User;
