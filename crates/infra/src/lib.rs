//! Persistence for the inventory store.
//!
//! Storage implementations live behind the [`SnapshotStore`] seam so shells
//! and tests can swap them.

pub mod json_file;
pub mod snapshot;

pub use json_file::{DEFAULT_SNAPSHOT_PATH, JsonFileStore};
pub use snapshot::{SnapshotError, SnapshotStore};
