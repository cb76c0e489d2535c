//! Inventory report aggregation.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Day window for the report's expiring-soon count.
pub const REPORT_EXPIRY_WINDOW_DAYS: i64 = 3;

/// Aggregate counts over the whole store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryReport {
    pub total_count: usize,
    /// Category label to number of records carrying it.
    pub counts_by_category: BTreeMap<String, usize>,
    /// Records dated within [`REPORT_EXPIRY_WINDOW_DAYS`], expired ones
    /// included. `Inventory::expiring_within` excludes expired records; this
    /// count does not, and the two must stay different.
    pub expiring_soon: usize,
    pub generated_at: DateTime<Utc>,
}
