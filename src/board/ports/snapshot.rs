//! Snapshot port: synchronous whole-document persistence.

use crate::board::domain::BoardState;
use std::sync::Arc;
use thiserror::Error;

/// The fixed slot name the board document is stored under.
pub const STORAGE_SLOT: &str = "task-board-storage";

/// Result type for snapshot store operations.
pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Whole-document persistence contract.
///
/// The store saves the entire document after every mutation and loads it
/// once at session start. Implementations must treat a missing or
/// undecodable document as absent (`Ok(None)`) rather than surfacing a
/// parse failure; the caller falls back to the seeded default state.
#[cfg_attr(test, mockall::automock)]
pub trait SnapshotStore {
    /// Persists the whole document, replacing any previous snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] when encoding or storage fails.
    fn save(&self, state: &BoardState) -> SnapshotResult<()>;

    /// Loads the persisted document.
    ///
    /// Returns `Ok(None)` when no snapshot exists or the stored document
    /// cannot be decoded.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] when the storage medium itself fails.
    fn load(&self) -> SnapshotResult<Option<BoardState>>;
}

/// Errors returned by snapshot store implementations.
#[derive(Debug, Clone, Error)]
pub enum SnapshotError {
    /// The document could not be encoded for storage.
    #[error("snapshot encoding failed: {0}")]
    Encode(Arc<serde_json::Error>),

    /// The storage medium rejected the operation.
    #[error("snapshot storage failed: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl SnapshotError {
    /// Wraps an encoding error.
    #[must_use]
    pub fn encode(err: serde_json::Error) -> Self {
        Self::Encode(Arc::new(err))
    }

    /// Wraps a storage error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}
