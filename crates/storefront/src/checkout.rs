//! Checkout flow.
//!
//! Validates the customer's order details, builds a transient [`Order`]
//! snapshot, and clears the cart on success. No payment is processed and
//! the order is not persisted anywhere; the returned value is all there is.

use chrono::Utc;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use velvet_bean_core::{Email, OrderId, OrderStatus};

use crate::cart::CartStore;
use crate::models::{CustomerContact, Order};
use crate::services::auth::{IdentityRepository, SessionStore};
use crate::storage::Storage;

/// Minimum customer-name length.
const MIN_NAME_LENGTH: usize = 2;

/// Minimum address length ("please enter your full address").
const MIN_ADDRESS_LENGTH: usize = 10;

/// Errors that can occur placing an order.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The cart has no lines.
    #[error("your cart is empty")]
    EmptyCart,

    /// A form field failed validation. Recovered locally; no state change.
    #[error("invalid {field}: {message}")]
    Validation {
        /// Which field failed.
        field: &'static str,
        /// What was wrong with it.
        message: String,
    },
}

/// Customer-entered order details.
#[derive(Debug, Clone)]
pub struct OrderDetails {
    /// Customer name (min 2 characters).
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Optional phone number.
    pub phone: Option<String>,
    /// Delivery address (min 10 characters).
    pub address: String,
    /// Optional order notes.
    pub notes: Option<String>,
    /// Whether to also subscribe the email to the newsletter.
    pub subscribe: bool,
}

impl OrderDetails {
    /// Validate the details, returning the parsed contact email.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::Validation` naming the offending field.
    fn validate(&self) -> Result<Email, CheckoutError> {
        if self.name.trim().chars().count() < MIN_NAME_LENGTH {
            return Err(CheckoutError::Validation {
                field: "name",
                message: format!("must be at least {MIN_NAME_LENGTH} characters"),
            });
        }

        let email = Email::parse(self.email.trim()).map_err(|e| CheckoutError::Validation {
            field: "email",
            message: e.to_string(),
        })?;

        if self.address.trim().chars().count() < MIN_ADDRESS_LENGTH {
            return Err(CheckoutError::Validation {
                field: "address",
                message: "please enter your full address".to_string(),
            });
        }

        Ok(email)
    }
}

/// Place an order from the current cart.
///
/// On success the cart is cleared (persisting the empty snapshot), the
/// email is optionally subscribed to the newsletter, and the order
/// snapshot is returned to the caller. On failure every store is left
/// exactly as it was.
///
/// # Errors
///
/// Returns `CheckoutError::EmptyCart` if there is nothing to order, or
/// `CheckoutError::Validation` if the details don't pass.
pub fn place_order<C, S, R>(
    cart: &mut CartStore<C>,
    session: &mut SessionStore<S, R>,
    details: &OrderDetails,
) -> Result<Order, CheckoutError>
where
    C: Storage,
    S: Storage,
    R: IdentityRepository,
{
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let email = details.validate()?;

    if details.subscribe {
        session.subscribe_to_newsletter(email.as_str());
    }

    let totals = cart.totals();
    let order = Order {
        id: OrderId::new(Uuid::new_v4().to_string()),
        items: cart.lines().to_vec(),
        total: totals.total_price,
        customer: CustomerContact {
            name: details.name.trim().to_string(),
            email,
            phone: details.phone.clone().filter(|p| !p.trim().is_empty()),
        },
        address: Some(details.address.trim().to_string()),
        status: OrderStatus::Pending,
        created_at: Utc::now(),
    };

    cart.clear();
    info!(order_id = %order.id, items = totals.total_items, "Order placed");

    Ok(order)
}
