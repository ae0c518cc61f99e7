//! Error types for board domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing or mutating domain board values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    /// The board name is empty after trimming.
    #[error("board name must not be empty")]
    EmptyBoardName,

    /// The column title is empty after trimming.
    #[error("column title must not be empty")]
    EmptyColumnTitle,

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTaskTitle,

    /// The user display name is empty after trimming.
    #[error("user name must not be empty")]
    EmptyUserName,

    /// A column reorder referenced an index outside the column list.
    #[error("column index {index} out of range for board with {len} columns")]
    ColumnIndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The current column count.
        len: usize,
    },
}

/// Error returned while parsing priority labels from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown priority: {0}")]
pub struct ParsePriorityError(pub String);
