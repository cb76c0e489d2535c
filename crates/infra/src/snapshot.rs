//! Whole-store snapshot persistence seam.

use thiserror::Error;

use bakestock_inventory::Inventory;

/// Snapshot store operation error.
///
/// Infrastructure failures only (storage, encoding); domain validation
/// errors never reach this layer.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("encode failure: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Whole-store snapshot persistence.
///
/// `load` never fails: a missing, unreadable, or undecodable snapshot yields
/// an empty inventory so the shell keeps running. `save` replaces the
/// previous snapshot with the full store; its failure is reported to the
/// caller and does not roll back in-memory state.
pub trait SnapshotStore {
    fn load(&self) -> Inventory;

    fn save(&self, inventory: &Inventory) -> Result<(), SnapshotError>;
}
