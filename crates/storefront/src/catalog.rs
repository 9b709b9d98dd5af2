//! In-memory product catalog.
//!
//! The catalog is seeded with the café menu and offers lookup and filter
//! accessors. Admin edits (`upsert`/`remove`) mutate only the catalog
//! instance they are called on; they are session-local demo state and are
//! never written back to the seed.

use rust_decimal::dec;
use tracing::info;

use velvet_bean_core::{Category, Price, ProductId};

use crate::models::Product;

/// The in-memory product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from an explicit product list.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Create a catalog seeded with the café menu.
    #[must_use]
    pub fn with_seed() -> Self {
        Self::new(seed_products())
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// All products in a category, in catalog order.
    #[must_use]
    pub fn by_category(&self, category: Category) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// All featured products, in catalog order.
    #[must_use]
    pub fn featured(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.featured).collect()
    }

    /// The full product list.
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Replace the product with a matching ID, or append a new one.
    ///
    /// Admin-panel edit path; the change lives only as long as this
    /// catalog instance.
    pub fn upsert(&mut self, product: Product) {
        if let Some(existing) = self.products.iter_mut().find(|p| p.id == product.id) {
            info!(product_id = %product.id, "Replacing catalog product");
            *existing = product;
        } else {
            info!(product_id = %product.id, "Adding catalog product");
            self.products.push(product);
        }
    }

    /// Remove a product by ID, returning it if present. Idempotent.
    pub fn remove(&mut self, id: &ProductId) -> Option<Product> {
        let pos = self.products.iter().position(|p| &p.id == id)?;
        info!(product_id = %id, "Removing catalog product");
        Some(self.products.remove(pos))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::with_seed()
    }
}

/// The seeded café menu.
fn seed_products() -> Vec<Product> {
    fn product(
        id: &str,
        name: &str,
        description: &str,
        price: Price,
        category: Category,
        image: &str,
        featured: bool,
        ingredients: Option<&[&str]>,
    ) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            description: description.to_string(),
            price,
            category,
            image: image.to_string(),
            featured,
            ingredients: ingredients.map(|list| list.iter().map(ToString::to_string).collect()),
            is_available: true,
        }
    }

    vec![
        product(
            "1",
            "Espresso",
            "A concentrated form of coffee served in small, strong shots.",
            Price::new(dec!(3.50)),
            Category::Coffee,
            "/espresso.jpg",
            true,
            Some(&["Coffee beans"]),
        ),
        product(
            "2",
            "Cappuccino",
            "An espresso-based coffee drink with steamed milk foam.",
            Price::new(dec!(4.50)),
            Category::Coffee,
            "/cappuccino.jpg",
            true,
            Some(&["Espresso", "Steamed milk", "Milk foam"]),
        ),
        product(
            "3",
            "Croissant",
            "A flaky, buttery pastry of Austrian origin.",
            Price::new(dec!(3.25)),
            Category::Food,
            "/croissant.jpg",
            false,
            Some(&["Flour", "Butter", "Sugar"]),
        ),
        product(
            "4",
            "Blueberry Muffin",
            "A small, sweet quickbread with fresh blueberries.",
            Price::new(dec!(3.75)),
            Category::Food,
            "/blueberry-muffin.jpg",
            false,
            Some(&["Flour", "Sugar", "Blueberries", "Butter"]),
        ),
        product(
            "5",
            "Latte",
            "Coffee drink made with espresso and steamed milk.",
            Price::new(dec!(4.25)),
            Category::Coffee,
            "/latte.jpg",
            false,
            Some(&["Espresso", "Steamed milk"]),
        ),
        product(
            "6",
            "Chocolate Cake",
            "Rich, moist chocolate layer cake with chocolate ganache.",
            Price::new(dec!(5.50)),
            Category::Dessert,
            "/chocolate-cake.jpg",
            false,
            Some(&["Flour", "Sugar", "Cocoa powder", "Butter"]),
        ),
        product(
            "7",
            "Chai Tea",
            "Spiced black tea with milk and honey.",
            Price::new(dec!(3.75)),
            Category::Coffee,
            "/chai-tea.jpg",
            false,
            Some(&["Black tea", "Spices", "Milk", "Honey"]),
        ),
        product(
            "8",
            "Cafe Mug",
            "Ceramic mug with our cafe logo.",
            Price::new(dec!(12.99)),
            Category::Merchandise,
            "/cafe-mug.jpg",
            false,
            None,
        ),
    ]
}
