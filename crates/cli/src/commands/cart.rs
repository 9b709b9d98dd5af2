//! Cart commands. State persists across invocations through file storage.

use tracing::info;

use velvet_bean_storefront::catalog::Catalog;
use velvet_bean_storefront::config::StorefrontConfig;
use velvet_bean_storefront::error::{Result, StoreError};

use super::load_cart;

/// Show the cart lines and derived totals.
///
/// # Errors
///
/// Returns `StoreError::Storage` if the data directory cannot be opened.
pub fn show(config: &StorefrontConfig) -> Result<()> {
    let cart = load_cart(config)?;

    if cart.is_empty() {
        info!("Your cart is empty");
        return Ok(());
    }

    for line in cart.lines() {
        info!(
            "{:>2} x {:<16} {:>8}",
            line.quantity,
            line.product.name,
            format!("${:.2}", line.subtotal().round_dp(2)),
        );
    }

    let totals = cart.totals();
    info!(
        "Total: {} items, ${:.2}",
        totals.total_items,
        totals.total_price_rounded()
    );
    Ok(())
}

/// Add a product to the cart.
///
/// # Errors
///
/// Returns `StoreError::NotFound` for an unknown product ID and
/// `StoreError::BadRequest` for an unavailable product.
pub fn add(config: &StorefrontConfig, id: &str, quantity: u32) -> Result<()> {
    let catalog = Catalog::with_seed();
    let product = catalog
        .get(&id.into())
        .ok_or_else(|| StoreError::NotFound(format!("product {id}")))?;

    if !product.is_available {
        return Err(StoreError::BadRequest(format!(
            "{} is currently unavailable",
            product.name
        )));
    }

    let mut cart = load_cart(config)?;
    cart.add_item(product.clone(), quantity);
    info!("Added {} x {}", quantity, product.name);
    show(config)
}

/// Set the quantity of a cart line; zero removes it.
///
/// # Errors
///
/// Returns `StoreError::Storage` if the data directory cannot be opened.
pub fn update(config: &StorefrontConfig, id: &str, quantity: u32) -> Result<()> {
    let mut cart = load_cart(config)?;
    cart.update_quantity(&id.into(), quantity);
    show(config)
}

/// Remove a cart line.
///
/// # Errors
///
/// Returns `StoreError::Storage` if the data directory cannot be opened.
pub fn remove(config: &StorefrontConfig, id: &str) -> Result<()> {
    let mut cart = load_cart(config)?;
    cart.remove_item(&id.into());
    show(config)
}

/// Empty the cart.
///
/// # Errors
///
/// Returns `StoreError::Storage` if the data directory cannot be opened.
pub fn clear(config: &StorefrontConfig) -> Result<()> {
    let mut cart = load_cart(config)?;
    cart.clear();
    info!("Cart cleared");
    Ok(())
}
