//! Cart line and derived totals types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Product;

/// One product+quantity pair in the cart.
///
/// Invariants (enforced by the cart store): `quantity >= 1`, and at most
/// one line per product ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// The product this line refers to (full snapshot, not just the ID, so
    /// a rehydrated cart renders without a catalog lookup).
    pub product: Product,
    /// Number of units, always at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// The line subtotal (quantity × unit price), full precision.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.product.price.extended(self.quantity)
    }
}

/// Totals derived from the current cart lines.
///
/// Never stored; recomputed from the lines after every mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Sum of all line quantities.
    pub total_items: u32,
    /// Sum of quantity × unit price across lines, full precision.
    pub total_price: Decimal,
}

impl CartTotals {
    /// Totals of an empty cart.
    pub const ZERO: Self = Self {
        total_items: 0,
        total_price: Decimal::ZERO,
    };

    /// Total price rounded to 2 decimal places (presentation boundary).
    #[must_use]
    pub fn total_price_rounded(&self) -> Decimal {
        self.total_price.round_dp(2)
    }
}
