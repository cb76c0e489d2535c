//! Quantity value object: numeric magnitude plus a free-text unit.

use std::fmt;

use crate::error::{InventoryError, InventoryResult};

/// A quantity split into magnitude and unit.
///
/// Records carry the combined "amount unit" text form; this type is the
/// parsed two-field form used for arithmetic. Compared by value.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    magnitude: f64,
    unit: String,
}

impl Quantity {
    /// Parse combined text such as `"5 kg"` or `"2 fl oz"`.
    ///
    /// The leading whitespace-separated token must be numeric; everything
    /// after it is the unit. Text without a unit is malformed.
    pub fn parse(text: &str) -> InventoryResult<Self> {
        let mut parts = text.split_whitespace();
        let lead = parts
            .next()
            .ok_or_else(|| InventoryError::malformed_quantity(text))?;
        let magnitude: f64 = lead
            .parse()
            .map_err(|_| InventoryError::malformed_quantity(text))?;
        let unit = parts.collect::<Vec<_>>().join(" ");
        if unit.is_empty() {
            return Err(InventoryError::malformed_quantity(text));
        }
        Ok(Self { magnitude, unit })
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Apply a signed delta, rejecting any result below zero.
    ///
    /// The failure carries the current combined text so shells can say what
    /// is actually available.
    pub fn checked_add(&self, delta: f64) -> InventoryResult<Self> {
        let magnitude = self.magnitude + delta;
        if magnitude < 0.0 {
            return Err(InventoryError::insufficient(self.to_string()));
        }
        Ok(Self {
            magnitude,
            unit: self.unit.clone(),
        })
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", format_magnitude(self.magnitude), self.unit)
    }
}

/// Integral magnitudes keep one decimal ("7.0"); fractional ones print
/// as-is ("6.5"). Matches the encoding already present in persisted files.
fn format_magnitude(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_magnitude_and_unit() {
        let quantity = Quantity::parse("5 kg").unwrap();
        assert_eq!(quantity.magnitude(), 5.0);
        assert_eq!(quantity.unit(), "kg");
    }

    #[test]
    fn parse_keeps_multi_word_units() {
        let quantity = Quantity::parse("2.5 fl oz").unwrap();
        assert_eq!(quantity.magnitude(), 2.5);
        assert_eq!(quantity.unit(), "fl oz");
    }

    #[test]
    fn parse_rejects_missing_unit() {
        let err = Quantity::parse("5").unwrap_err();
        assert_eq!(err, InventoryError::malformed_quantity("5"));
    }

    #[test]
    fn parse_rejects_non_numeric_lead() {
        let err = Quantity::parse("plenty of kg").unwrap_err();
        assert_eq!(err, InventoryError::malformed_quantity("plenty of kg"));
    }

    #[test]
    fn parse_rejects_empty_text() {
        assert!(Quantity::parse("   ").is_err());
    }

    #[test]
    fn display_keeps_one_decimal_for_integral_magnitudes() {
        let quantity = Quantity::parse("7 kg").unwrap();
        assert_eq!(quantity.to_string(), "7.0 kg");

        let quantity = Quantity::parse("6.5 kg").unwrap();
        assert_eq!(quantity.to_string(), "6.5 kg");
    }

    #[test]
    fn checked_add_applies_signed_deltas() {
        let quantity = Quantity::parse("5 kg").unwrap();
        assert_eq!(quantity.checked_add(2.0).unwrap().to_string(), "7.0 kg");
        assert_eq!(quantity.checked_add(-1.5).unwrap().to_string(), "3.5 kg");
    }

    #[test]
    fn checked_add_rejects_results_below_zero() {
        let quantity = Quantity::parse("5 kg").unwrap();
        let err = quantity.checked_add(-100.0).unwrap_err();
        assert_eq!(
            err,
            InventoryError::InsufficientStock {
                available: "5.0 kg".to_string()
            }
        );
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: rendering a quantity and parsing it back is lossless.
            #[test]
            fn render_parse_round_trip(
                magnitude in 0.0f64..1_000_000.0,
                unit in "[a-z]{1,8}( [a-z]{1,8})?"
            ) {
                let quantity = Quantity::parse(&format!("{magnitude} {unit}")).unwrap();
                let reparsed = Quantity::parse(&quantity.to_string()).unwrap();
                prop_assert_eq!(quantity, reparsed);
            }

            /// Property: a non-negative delta never produces an error.
            #[test]
            fn non_negative_deltas_always_apply(
                magnitude in 0.0f64..1_000.0,
                delta in 0.0f64..1_000.0
            ) {
                let quantity = Quantity::parse(&format!("{magnitude} g")).unwrap();
                let updated = quantity.checked_add(delta).unwrap();
                prop_assert!(updated.magnitude() >= quantity.magnitude());
            }
        }
    }
}
