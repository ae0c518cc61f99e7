//! In-memory snapshot slot for tests and ephemeral sessions.

use crate::board::domain::BoardState;
use crate::board::ports::{SnapshotError, SnapshotResult, SnapshotStore};
use std::sync::{Arc, RwLock};

/// Snapshot store holding the document in a shared in-memory slot.
///
/// Clones share the slot, so a store and a later session opened from the
/// same adapter observe the same persisted document.
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshotStore {
    slot: Arc<RwLock<Option<BoardState>>>,
}

impl InMemorySnapshotStore {
    /// Creates an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn save(&self, state: &BoardState) -> SnapshotResult<()> {
        let mut slot = self
            .slot
            .write()
            .map_err(|err| SnapshotError::storage(std::io::Error::other(err.to_string())))?;
        *slot = Some(state.clone());
        Ok(())
    }

    fn load(&self) -> SnapshotResult<Option<BoardState>> {
        let slot = self
            .slot
            .read()
            .map_err(|err| SnapshotError::storage(std::io::Error::other(err.to_string())))?;
        Ok(slot.clone())
    }
}
