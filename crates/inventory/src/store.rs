//! The inventory store: a flat mapping from normalized name to record.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{InventoryError, InventoryResult};
use crate::quantity::Quantity;
use crate::record::{DATE_FORMAT, IngredientRecord};
use crate::report::{InventoryReport, REPORT_EXPIRY_WINDOW_DAYS};

/// Normalize an ingredient name for use as a store key: trim and case-fold.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Mapping from normalized ingredient name to its record.
///
/// Keys are unique and always equal the normalized name of their record.
/// Iteration is in key order. Serializes transparently as one JSON object
/// keyed by name.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: BTreeMap<String, IngredientRecord>,
}

/// One row of an expiring-stock query.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpiringItem<'a> {
    pub name: &'a str,
    pub record: &'a IngredientRecord,
    pub days_remaining: i64,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Records in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &IngredientRecord)> {
        self.items
            .iter()
            .map(|(name, record)| (name.as_str(), record))
    }

    pub fn get(&self, name: &str) -> Option<&IngredientRecord> {
        self.items.get(&normalize_name(name))
    }

    /// Insert a new ingredient.
    ///
    /// The quantity text is stored as given; it is only split into magnitude
    /// and unit once a quantity update needs the arithmetic. Nothing is
    /// overwritten on failure.
    pub fn add(
        &mut self,
        name: &str,
        quantity_text: &str,
        category: &str,
        today: NaiveDate,
    ) -> InventoryResult<()> {
        let key = normalize_name(name);
        if key.is_empty() {
            return Err(InventoryError::EmptyName);
        }
        if self.items.contains_key(&key) {
            return Err(InventoryError::duplicate(key));
        }
        self.items
            .insert(key, IngredientRecord::new(quantity_text, category, today));
        Ok(())
    }

    /// Apply a signed delta to an ingredient's magnitude.
    ///
    /// Returns the new combined quantity text and stamps `last_updated`.
    /// The record is untouched on any failure.
    pub fn adjust(&mut self, name: &str, delta: f64, today: NaiveDate) -> InventoryResult<String> {
        let key = normalize_name(name);
        let record = self
            .items
            .get_mut(&key)
            .ok_or_else(|| InventoryError::not_found(key.as_str()))?;
        let current = Quantity::parse(&record.quantity)?;
        let updated = current.checked_add(delta)?;
        record.quantity = updated.to_string();
        record.last_updated = today;
        Ok(record.quantity.clone())
    }

    /// Consume stock: a non-negative amount deducted from the magnitude.
    pub fn consume(&mut self, name: &str, amount: f64, today: NaiveDate) -> InventoryResult<String> {
        if amount < 0.0 {
            return Err(InventoryError::InvalidAmount);
        }
        self.adjust(name, -amount, today)
    }

    /// Every record whose normalized name contains the case-folded term,
    /// in store-iteration order.
    pub fn search(&self, term: &str) -> Vec<(&str, &IngredientRecord)> {
        let needle = normalize_name(term);
        self.items
            .iter()
            .filter(|(name, _)| name.contains(&needle))
            .map(|(name, record)| (name.as_str(), record))
            .collect()
    }

    /// Delete an ingredient. Unconditional; any confirmation dialog is a
    /// shell concern.
    pub fn remove(&mut self, name: &str) -> InventoryResult<()> {
        let key = normalize_name(name);
        self.items
            .remove(&key)
            .map(|_| ())
            .ok_or_else(|| InventoryError::not_found(key))
    }

    /// Set or clear an ingredient's expiration date.
    ///
    /// Empty text clears the date. Anything else must parse as `YYYY-MM-DD`;
    /// the record is untouched when parsing fails.
    pub fn set_expiration(&mut self, name: &str, date_text: &str) -> InventoryResult<()> {
        let key = normalize_name(name);
        let record = self
            .items
            .get_mut(&key)
            .ok_or_else(|| InventoryError::not_found(key.as_str()))?;
        let text = date_text.trim();
        if text.is_empty() {
            record.expiration_date = None;
            return Ok(());
        }
        let date = NaiveDate::parse_from_str(text, DATE_FORMAT)
            .map_err(|_| InventoryError::invalid_date(text))?;
        record.expiration_date = Some(date);
        Ok(())
    }

    /// Records with an expiration within `days` of `today`.
    ///
    /// Already-expired records (negative day difference) are not included.
    pub fn expiring_within(&self, today: NaiveDate, days: i64) -> Vec<ExpiringItem<'_>> {
        self.items
            .iter()
            .filter_map(|(name, record)| {
                let expiration = record.expiration_date?;
                let days_remaining = (expiration - today).num_days();
                (0..=days).contains(&days_remaining).then(|| ExpiringItem {
                    name: name.as_str(),
                    record,
                    days_remaining,
                })
            })
            .collect()
    }

    /// Aggregate snapshot of the store.
    ///
    /// Unlike [`Inventory::expiring_within`], the expiring-soon count also
    /// includes records already past their date.
    pub fn report(&self, now: DateTime<Utc>) -> InventoryReport {
        let today = now.date_naive();
        let mut counts_by_category: BTreeMap<String, usize> = BTreeMap::new();
        let mut expiring_soon = 0;
        for record in self.items.values() {
            *counts_by_category
                .entry(record.category.clone())
                .or_insert(0) += 1;
            if let Some(expiration) = record.expiration_date {
                if (expiration - today).num_days() <= REPORT_EXPIRY_WINDOW_DAYS {
                    expiring_soon += 1;
                }
            }
        }
        InventoryReport {
            total_count: self.len(),
            counts_by_category,
            expiring_soon,
            generated_at: now,
        }
    }
}
