//! Catalog browsing commands.

use tracing::info;

use velvet_bean_core::Category;
use velvet_bean_storefront::catalog::Catalog;
use velvet_bean_storefront::error::{Result, StoreError};
use velvet_bean_storefront::models::Product;

/// List the menu, optionally filtered by category or featured flag.
///
/// # Errors
///
/// Returns `StoreError::BadRequest` if the category name is unknown.
pub fn list(category: Option<&str>, featured: bool) -> Result<()> {
    let catalog = Catalog::with_seed();

    let products: Vec<&Product> = match (category, featured) {
        (Some(name), _) => {
            let category: Category = name
                .parse()
                .map_err(|e: velvet_bean_core::CategoryParseError| {
                    StoreError::BadRequest(e.to_string())
                })?;
            catalog.by_category(category)
        }
        (None, true) => catalog.featured(),
        (None, false) => catalog.all().iter().collect(),
    };

    for product in products {
        print_line(product);
    }
    Ok(())
}

/// Show one product in full.
///
/// # Errors
///
/// Returns `StoreError::NotFound` if no product has the given ID.
pub fn show(id: &str) -> Result<()> {
    let catalog = Catalog::with_seed();
    let product = catalog
        .get(&id.into())
        .ok_or_else(|| StoreError::NotFound(format!("product {id}")))?;

    info!("{} - {} [{}]", product.id, product.name, product.category);
    info!("  {}", product.description);
    info!("  Price: {}", product.price);
    if let Some(ingredients) = &product.ingredients {
        info!("  Ingredients: {}", ingredients.join(", "));
    }
    if !product.is_available {
        info!("  Currently unavailable");
    }
    Ok(())
}

fn print_line(product: &Product) {
    let marker = if product.featured { " *" } else { "" };
    info!(
        "{:>2}  {:<16} {:>7}  [{}]{}",
        product.id,
        product.name,
        product.price.display(),
        product.category,
        marker
    );
}
