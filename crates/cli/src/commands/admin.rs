//! Admin panel commands.
//!
//! All admin commands require a logged-in admin account. Catalog edits are
//! session-local demo state: they apply to the catalog instance built for
//! this invocation and are never written back to the seed.

use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::info;

use velvet_bean_core::{Category, Price, ProductId};
use velvet_bean_storefront::catalog::Catalog;
use velvet_bean_storefront::config::StorefrontConfig;
use velvet_bean_storefront::error::{Result, StoreError};
use velvet_bean_storefront::models::{Product, order};

use super::load_session;

/// Arguments for creating or replacing a product.
pub struct ProductArgs {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: String,
    pub image: String,
    pub featured: bool,
    pub ingredients: Option<String>,
    pub unavailable: bool,
}

/// List all products, including unavailable ones.
///
/// # Errors
///
/// Returns `StoreError::Unauthorized` without an admin session.
pub fn list_products(config: &StorefrontConfig) -> Result<()> {
    require_admin(config)?;
    let catalog = Catalog::with_seed();

    for product in catalog.all() {
        let availability = if product.is_available {
            ""
        } else {
            "  (unavailable)"
        };
        info!(
            "{:>2}  {:<16} {:>7}  [{}]{}",
            product.id,
            product.name,
            product.price.display(),
            product.category,
            availability
        );
    }
    Ok(())
}

/// Create or replace a product by ID.
///
/// # Errors
///
/// Returns `StoreError::Unauthorized` without an admin session, or
/// `StoreError::BadRequest` for an unparsable price or category.
pub fn upsert_product(config: &StorefrontConfig, args: ProductArgs) -> Result<()> {
    require_admin(config)?;

    let price = Decimal::from_str(&args.price)
        .map_err(|e| StoreError::BadRequest(format!("invalid price: {e}")))?;
    if price.is_sign_negative() {
        return Err(StoreError::BadRequest(
            "price must not be negative".to_string(),
        ));
    }
    let category: Category = args
        .category
        .parse()
        .map_err(|e: velvet_bean_core::CategoryParseError| StoreError::BadRequest(e.to_string()))?;

    let product = Product {
        id: ProductId::new(args.id),
        name: args.name,
        description: args.description,
        price: Price::new(price),
        category,
        image: args.image,
        featured: args.featured,
        ingredients: args
            .ingredients
            .map(|list| list.split(',').map(|i| i.trim().to_string()).collect()),
        is_available: !args.unavailable,
    };

    let mut catalog = Catalog::with_seed();
    catalog.upsert(product.clone());

    info!("Saved {} ({})", product.name, product.id);
    info!("Note: catalog edits are demo state and do not outlive this command");
    Ok(())
}

/// Delete a product by ID.
///
/// # Errors
///
/// Returns `StoreError::Unauthorized` without an admin session, or
/// `StoreError::NotFound` for an unknown product.
pub fn remove_product(config: &StorefrontConfig, id: &str) -> Result<()> {
    require_admin(config)?;

    let mut catalog = Catalog::with_seed();
    let removed = catalog
        .remove(&id.into())
        .ok_or_else(|| StoreError::NotFound(format!("product {id}")))?;

    info!("{} has been deleted", removed.name);
    info!("Note: catalog edits are demo state and do not outlive this command");
    Ok(())
}

/// List the static mock order records.
///
/// # Errors
///
/// Returns `StoreError::Unauthorized` without an admin session.
pub fn list_orders(config: &StorefrontConfig) -> Result<()> {
    require_admin(config)?;
    let catalog = Catalog::with_seed();

    for order in order::mock_orders(&catalog) {
        info!(
            "{}  {:<10} {:<12} ${:.2}  {}",
            order.created_at.format("%Y-%m-%d"),
            order.id,
            order.status,
            order.total.round_dp(2),
            order.customer.name
        );
    }
    Ok(())
}

fn require_admin(config: &StorefrontConfig) -> Result<()> {
    let session = load_session(config)?;
    if !session.is_admin() {
        return Err(StoreError::Unauthorized(
            "you need to login as admin to access this page".to_string(),
        ));
    }
    Ok(())
}
