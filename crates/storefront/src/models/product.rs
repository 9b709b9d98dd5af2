//! Product domain type.

use serde::{Deserialize, Serialize};

use velvet_bean_core::{Category, Price, ProductId};

/// A catalog product.
///
/// Immutable within a session except via the admin panel's replace-by-id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Stable product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Menu description.
    pub description: String,
    /// Unit price (never negative).
    pub price: Price,
    /// Menu category.
    pub category: Category,
    /// Image path reference, relative to the asset root.
    pub image: String,
    /// Whether the product appears in the featured section.
    #[serde(default)]
    pub featured: bool,
    /// Ingredient list, where one applies (merchandise has none).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    /// Whether the product can currently be ordered.
    pub is_available: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::dec;
    use velvet_bean_core::Price;

    use super::*;

    fn espresso() -> Product {
        Product {
            id: ProductId::new("1"),
            name: "Espresso".to_string(),
            description: "A concentrated form of coffee.".to_string(),
            price: Price::new(dec!(3.50)),
            category: Category::Coffee,
            image: "/espresso.jpg".to_string(),
            featured: true,
            ingredients: Some(vec!["Coffee beans".to_string()]),
            is_available: true,
        }
    }

    #[test]
    fn test_snapshot_field_names_are_camel_case() {
        let json = serde_json::to_value(espresso()).unwrap();
        assert!(json.get("isAvailable").is_some());
        assert!(json.get("is_available").is_none());
        assert_eq!(json["category"], "coffee");
    }

    #[test]
    fn test_deserializes_without_optional_fields() {
        // `featured` and `ingredients` are optional in older snapshots.
        let json = r#"{
            "id": "8",
            "name": "Cafe Mug",
            "description": "Ceramic mug with our cafe logo.",
            "price": "12.99",
            "category": "merchandise",
            "image": "/cafe-mug.jpg",
            "isAvailable": true
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(!product.featured);
        assert!(product.ingredients.is_none());
        assert_eq!(product.price, Price::new(dec!(12.99)));
    }
}
