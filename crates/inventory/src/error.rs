//! Domain error model.

use thiserror::Error;

/// Result type used across the inventory domain.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Inventory-level error.
///
/// Keep this focused on deterministic, recoverable domain failures
/// (validation, missing records, arithmetic that would break invariants).
/// Storage concerns belong to the infra layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// The ingredient name normalized down to an empty string.
    #[error("ingredient name cannot be empty")]
    EmptyName,

    /// An ingredient with this normalized name already exists.
    #[error("'{0}' already exists in inventory")]
    DuplicateName(String),

    /// No ingredient with this normalized name.
    #[error("'{0}' not found in inventory")]
    NotFound(String),

    /// The stored quantity text has no leading numeric magnitude.
    #[error("invalid quantity format: '{0}'")]
    MalformedQuantity(String),

    /// The update would drive the stored magnitude below zero.
    #[error("not enough stock, only {available} available")]
    InsufficientStock { available: String },

    /// A consumption amount was negative.
    #[error("amount must not be negative")]
    InvalidAmount,

    /// An expiration date was not valid `YYYY-MM-DD`.
    #[error("invalid date format '{0}', expected YYYY-MM-DD")]
    InvalidDateFormat(String),
}

impl InventoryError {
    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::DuplicateName(name.into())
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    pub fn malformed_quantity(text: impl Into<String>) -> Self {
        Self::MalformedQuantity(text.into())
    }

    pub fn insufficient(available: impl Into<String>) -> Self {
        Self::InsufficientStock {
            available: available.into(),
        }
    }

    pub fn invalid_date(text: impl Into<String>) -> Self {
        Self::InvalidDateFormat(text.into())
    }
}
