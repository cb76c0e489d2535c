//! Inventory domain module.
//!
//! This crate contains business rules for the ingredient inventory,
//! implemented purely as deterministic domain logic (no IO, no terminal,
//! no storage).

pub mod error;
pub mod quantity;
pub mod record;
pub mod report;
pub mod store;

pub use error::{InventoryError, InventoryResult};
pub use quantity::Quantity;
pub use record::{DATE_FORMAT, IngredientRecord, UNCATEGORIZED};
pub use report::{InventoryReport, REPORT_EXPIRY_WINDOW_DAYS};
pub use store::{ExpiringItem, Inventory, normalize_name};
