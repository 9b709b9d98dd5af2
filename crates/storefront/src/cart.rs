//! Cart state store.
//!
//! Holds the line items for the active session and writes the full
//! serialized snapshot to on-device storage after every mutation. At
//! session start [`CartStore::load`] rehydrates from the same key,
//! tolerating a missing or corrupt blob by starting empty.

use tracing::{debug, warn};

use velvet_bean_core::ProductId;

use crate::models::{CartLine, CartTotals, Product};
use crate::storage::{Storage, keys};

/// The cart store for one session.
///
/// Mutations are synchronous; derived totals are recomputed from the lines
/// on every [`CartStore::totals`] call rather than stored.
#[derive(Debug)]
pub struct CartStore<S: Storage> {
    storage: S,
    lines: Vec<CartLine>,
}

impl<S: Storage> CartStore<S> {
    /// Create a cart store, rehydrating any persisted snapshot.
    ///
    /// A missing blob, an unreadable backend, or a corrupt snapshot all
    /// start the session with an empty cart; nothing here is fatal.
    pub fn load(storage: S) -> Self {
        let lines = match storage.get(keys::CART) {
            Ok(Some(blob)) => match serde_json::from_str::<Vec<CartLine>>(&blob) {
                Ok(lines) => lines,
                Err(e) => {
                    warn!(error = %e, "Corrupt cart snapshot, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "Failed to read cart snapshot, starting empty");
                Vec::new()
            }
        };

        // Drop any line a corrupt edit left at zero quantity.
        let lines: Vec<CartLine> = lines.into_iter().filter(|l| l.quantity > 0).collect();

        debug!(lines = lines.len(), "Cart store loaded");
        Self { storage, lines }
    }

    /// Add `quantity` units of `product` to the cart.
    ///
    /// If a line for the product already exists its quantity is
    /// incremented; otherwise a new line is appended. A zero quantity is a
    /// no-op.
    pub fn add_item(&mut self, product: Product, quantity: u32) {
        if quantity == 0 {
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            self.lines.push(CartLine { product, quantity });
        }
        self.persist();
    }

    /// Set the quantity of the line for `product_id`.
    ///
    /// A quantity of zero removes the line. No-op if there is no line for
    /// the product.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove_item(product_id);
            return;
        }

        let Some(line) = self.lines.iter_mut().find(|l| &l.product.id == product_id) else {
            return;
        };
        line.quantity = quantity;
        self.persist();
    }

    /// Remove the line for `product_id`, if present. Idempotent.
    pub fn remove_item(&mut self, product_id: &ProductId) {
        let before = self.lines.len();
        self.lines.retain(|l| &l.product.id != product_id);
        if self.lines.len() != before {
            self.persist();
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.persist();
    }

    /// Derived totals, recomputed from the current lines.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        CartTotals {
            total_items: self.lines.iter().map(|l| l.quantity).sum(),
            total_price: self.lines.iter().map(CartLine::subtotal).sum(),
        }
    }

    /// The current line items, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Write the full snapshot to storage.
    ///
    /// A storage failure leaves the in-memory state authoritative for the
    /// rest of the session; the next successful mutation rewrites the
    /// whole blob anyway.
    fn persist(&self) {
        let blob = match serde_json::to_string(&self.lines) {
            Ok(blob) => blob,
            Err(e) => {
                warn!(error = %e, "Failed to serialize cart snapshot");
                return;
            }
        };
        if let Err(e) = self.storage.set(keys::CART, &blob) {
            warn!(error = %e, "Failed to persist cart snapshot");
        }
    }
}
