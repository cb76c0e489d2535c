//! Ingredient record: the value side of the inventory mapping.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Calendar date encoding used everywhere a date crosses a text boundary.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Sentinel category for records stored without one.
pub const UNCATEGORIZED: &str = "uncategorized";

/// One inventory entry.
///
/// `quantity` stays in its combined "amount unit" text form as given at add
/// time; splitting into magnitude and unit happens on quantity updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientRecord {
    pub quantity: String,
    #[serde(default = "default_category")]
    pub category: String,
    pub last_updated: NaiveDate,
    #[serde(default)]
    pub expiration_date: Option<NaiveDate>,
}

impl IngredientRecord {
    /// Build a fresh record as of `today`, with no expiration set.
    ///
    /// A blank category collapses to the [`UNCATEGORIZED`] sentinel.
    pub fn new(
        quantity: impl Into<String>,
        category: impl Into<String>,
        today: NaiveDate,
    ) -> Self {
        let category = category.into();
        let category = if category.trim().is_empty() {
            UNCATEGORIZED.to_string()
        } else {
            category
        };
        Self {
            quantity: quantity.into(),
            category,
            last_updated: today,
            expiration_date: None,
        }
    }
}

fn default_category() -> String {
    UNCATEGORIZED.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn new_record_collapses_blank_category() {
        let record = IngredientRecord::new("5 kg", "  ", day(2025, 1, 10));
        assert_eq!(record.category, UNCATEGORIZED);
        assert_eq!(record.expiration_date, None);
    }

    #[test]
    fn serializes_dates_as_plain_calendar_dates() {
        let mut record = IngredientRecord::new("5 kg", "dry", day(2025, 1, 10));
        record.expiration_date = Some(day(2025, 2, 1));

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["quantity"], "5 kg");
        assert_eq!(value["category"], "dry");
        assert_eq!(value["last_updated"], "2025-01-10");
        assert_eq!(value["expiration_date"], "2025-02-01");
    }

    #[test]
    fn serializes_missing_expiration_as_null() {
        let record = IngredientRecord::new("5 kg", "dry", day(2025, 1, 10));
        let value = serde_json::to_value(&record).unwrap();
        assert!(value["expiration_date"].is_null());
    }

    #[test]
    fn deserializes_with_missing_optional_fields() {
        let record: IngredientRecord =
            serde_json::from_str(r#"{"quantity": "5 kg", "last_updated": "2025-01-10"}"#).unwrap();
        assert_eq!(record.category, UNCATEGORIZED);
        assert_eq!(record.expiration_date, None);
    }
}
