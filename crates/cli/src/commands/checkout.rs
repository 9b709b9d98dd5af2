//! Checkout command.

use tracing::info;

use velvet_bean_storefront::checkout::{self, OrderDetails};
use velvet_bean_storefront::config::StorefrontConfig;
use velvet_bean_storefront::error::{Result, StoreError};

use super::{load_cart, load_session};

/// Arguments collected from the checkout command line.
pub struct CheckoutArgs {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: String,
    pub notes: Option<String>,
    pub subscribe: bool,
}

/// Place an order from the current cart.
///
/// Name and email fall back to the logged-in user's details, the same
/// pre-fill the checkout form used.
///
/// # Errors
///
/// Returns `StoreError::BadRequest` if name or email is missing for a
/// guest, or `StoreError::Checkout` on an empty cart or failed validation.
pub fn place(config: &StorefrontConfig, args: CheckoutArgs) -> Result<()> {
    let mut cart = load_cart(config)?;
    let mut session = load_session(config)?;

    let current = session.current_user().cloned();
    let name = args
        .name
        .or_else(|| current.as_ref().map(|u| u.name.clone()))
        .ok_or_else(|| StoreError::BadRequest("--name is required for guests".to_string()))?;
    let email = args
        .email
        .or_else(|| current.as_ref().map(|u| u.email.to_string()))
        .ok_or_else(|| StoreError::BadRequest("--email is required for guests".to_string()))?;

    let details = OrderDetails {
        name,
        email,
        phone: args.phone,
        address: args.address,
        notes: args.notes,
        subscribe: args.subscribe,
    };

    let order = checkout::place_order(&mut cart, &mut session, &details)?;

    info!("Order {} placed!", order.id);
    for line in &order.items {
        info!("  {} x {}", line.quantity, line.product.name);
    }
    info!("Total: ${:.2}", order.total.round_dp(2));
    info!("A confirmation has been sent to {}", order.customer.email);
    Ok(())
}
