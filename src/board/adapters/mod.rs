//! Adapter implementations of the snapshot port.

pub mod file;
pub mod memory;

pub use file::JsonFileSnapshotStore;
pub use memory::InMemorySnapshotStore;
