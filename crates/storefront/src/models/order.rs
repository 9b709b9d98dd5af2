//! Order domain types and admin-view mock records.
//!
//! Checkout builds an [`Order`] transiently and hands it to the caller;
//! nothing persists it. The admin panel additionally lists a few static
//! mock orders so the orders tab has something to show.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use velvet_bean_core::{Email, OrderId, OrderStatus};

use super::CartLine;
use crate::catalog::Catalog;

/// Customer contact details captured at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerContact {
    /// Customer name.
    pub name: String,
    /// Customer email.
    pub email: Email,
    /// Optional phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order ID.
    pub id: OrderId,
    /// Line items as they stood at checkout.
    pub items: Vec<CartLine>,
    /// Order total, full precision.
    pub total: rust_decimal::Decimal,
    /// Customer contact details.
    pub customer: CustomerContact,
    /// Delivery address, if one was given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Lifecycle status.
    pub status: OrderStatus,
    /// When the order was placed.
    pub created_at: DateTime<Utc>,
}

/// Static mock orders for the admin panel's orders tab.
///
/// Not produced by the real checkout flow and never persisted; products
/// are drawn from the given catalog, so records referencing deleted
/// products are simply skipped.
#[must_use]
pub fn mock_orders(catalog: &Catalog) -> Vec<Order> {
    let entries = [
        (
            "order1",
            "Jane Doe",
            "jane@example.com",
            "12 Harbor Lane",
            OrderStatus::Completed,
            vec![("1", 2), ("3", 1)],
            Utc.with_ymd_and_hms(2025, 5, 2, 9, 15, 0),
        ),
        (
            "order2",
            "Sam Park",
            "sam@example.com",
            "48 Mill Street",
            OrderStatus::Processing,
            vec![("5", 1), ("6", 1)],
            Utc.with_ymd_and_hms(2025, 5, 3, 14, 40, 0),
        ),
        (
            "order3",
            "Ada Quinn",
            "ada@example.com",
            "7 Birch Road",
            OrderStatus::Pending,
            vec![("8", 1)],
            Utc.with_ymd_and_hms(2025, 5, 4, 8, 5, 0),
        ),
    ];

    entries
        .into_iter()
        .filter_map(|(id, name, email, address, status, lines, ts)| {
            let email = Email::parse(email).ok()?;
            let created_at = ts.single()?;

            let items: Vec<CartLine> = lines
                .into_iter()
                .filter_map(|(product_id, quantity)| {
                    let product = catalog.get(&product_id.into())?.clone();
                    Some(CartLine { product, quantity })
                })
                .collect();
            if items.is_empty() {
                return None;
            }

            let total = items.iter().map(CartLine::subtotal).sum();

            Some(Order {
                id: OrderId::new(id),
                items,
                total,
                customer: CustomerContact {
                    name: name.to_string(),
                    email,
                    phone: None,
                },
                address: Some(address.to_string()),
                status,
                created_at,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;

    use super::*;

    #[test]
    fn test_mock_orders_use_catalog_products() {
        let catalog = Catalog::with_seed();
        let orders = mock_orders(&catalog);
        assert_eq!(orders.len(), 3);

        // order1: 2x Espresso (3.50) + 1x Croissant (3.25)
        let first = orders.first().expect("order1 present");
        assert_eq!(first.total, dec!(10.25));
        assert_eq!(first.status, OrderStatus::Completed);
    }

    #[test]
    fn test_mock_orders_skip_deleted_products() {
        let mut catalog = Catalog::with_seed();
        catalog.remove(&"8".into());

        let orders = mock_orders(&catalog);
        // order3 contained only the mug, so it drops out entirely.
        assert_eq!(orders.len(), 2);
    }
}
