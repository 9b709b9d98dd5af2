//! Type-safe price representation using decimal arithmetic.
//!
//! All internal arithmetic stays in full [`Decimal`] precision; rounding to
//! two decimal places happens only at the presentation boundary via
//! [`Price::rounded`] and [`Price::display`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A unit price in the catalog's single display currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new price from a decimal amount.
    ///
    /// Negative amounts are clamped to zero; the catalog never carries a
    /// negative unit price.
    #[must_use]
    pub fn new(amount: Decimal) -> Self {
        Self(amount.max(Decimal::ZERO))
    }

    /// Create a price from a whole number of cents.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self::new(Decimal::new(cents, 2))
    }

    /// The full-precision amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Amount multiplied by a line quantity, full precision.
    #[must_use]
    pub fn extended(&self, quantity: u32) -> Decimal {
        self.0 * Decimal::from(quantity)
    }

    /// Amount rounded to 2 decimal places (presentation boundary).
    #[must_use]
    pub fn rounded(&self) -> Decimal {
        self.0.round_dp(2)
    }

    /// Format for display (e.g., "$3.50").
    #[must_use]
    pub fn display(&self) -> String {
        format!("${:.2}", self.rounded())
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self::new(amount)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;

    use super::*;

    #[test]
    fn test_negative_amount_clamped_to_zero() {
        let price = Price::new(dec!(-1.50));
        assert_eq!(price, Price::ZERO);
    }

    #[test]
    fn test_from_cents() {
        assert_eq!(Price::from_cents(350).amount(), dec!(3.50));
        assert_eq!(Price::from_cents(1299).amount(), dec!(12.99));
    }

    #[test]
    fn test_extended_keeps_full_precision() {
        let price = Price::new(dec!(3.333));
        assert_eq!(price.extended(3), dec!(9.999));
    }

    #[test]
    fn test_rounding_only_at_display() {
        let price = Price::new(dec!(3.333));
        assert_eq!(price.amount(), dec!(3.333));
        assert_eq!(price.rounded(), dec!(3.33));
        assert_eq!(price.display(), "$3.33");
    }

    #[test]
    fn test_display_pads_to_two_places() {
        assert_eq!(Price::new(dec!(4.5)).display(), "$4.50");
        assert_eq!(Price::new(dec!(3)).display(), "$3.00");
    }
}
