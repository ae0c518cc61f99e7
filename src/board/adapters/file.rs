//! JSON file snapshot store: the durable local slot.
//!
//! The document lives in one pretty-printed JSON file named after the
//! storage slot, inside a capability-scoped directory. The adapter never
//! reaches outside that directory.

use crate::board::domain::BoardState;
use crate::board::ports::{STORAGE_SLOT, SnapshotError, SnapshotResult, SnapshotStore};
use cap_std::ambient_authority;
use cap_std::fs_utf8::{camino::Utf8Path, Dir};
use tracing::warn;

/// Snapshot store writing the document to `<slot>.json` in a directory.
#[derive(Debug)]
pub struct JsonFileSnapshotStore {
    dir: Dir,
    file_name: String,
}

impl JsonFileSnapshotStore {
    /// Opens a store over the given directory using the default slot name.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Storage`] when the directory cannot be
    /// opened.
    pub fn open(root: impl AsRef<Utf8Path>) -> SnapshotResult<Self> {
        Self::open_slot(root, STORAGE_SLOT)
    }

    /// Opens a store over the given directory with an explicit slot name.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Storage`] when the directory cannot be
    /// opened.
    pub fn open_slot(root: impl AsRef<Utf8Path>, slot: &str) -> SnapshotResult<Self> {
        let dir =
            Dir::open_ambient_dir(root.as_ref(), ambient_authority()).map_err(SnapshotError::storage)?;
        Ok(Self {
            dir,
            file_name: format!("{slot}.json"),
        })
    }
}

impl SnapshotStore for JsonFileSnapshotStore {
    fn save(&self, state: &BoardState) -> SnapshotResult<()> {
        let body = serde_json::to_string_pretty(state).map_err(SnapshotError::encode)?;
        self.dir
            .write(&self.file_name, body)
            .map_err(SnapshotError::storage)
    }

    fn load(&self) -> SnapshotResult<Option<BoardState>> {
        let body = match self.dir.read_to_string(&self.file_name) {
            Ok(body) => body,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(SnapshotError::storage(err)),
        };
        match serde_json::from_str(&body) {
            Ok(state) => Ok(Some(state)),
            Err(err) => {
                warn!(file = %self.file_name, error = %err, "discarding undecodable snapshot");
                Ok(None)
            }
        }
    }
}
