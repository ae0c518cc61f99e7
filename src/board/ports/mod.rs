//! Port contracts for board state persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the board
//! store service.

pub mod snapshot;

pub use snapshot::{STORAGE_SLOT, SnapshotError, SnapshotResult, SnapshotStore};
