//! Shared helpers for the Velvet Bean integration tests.
//!
//! The actual tests live in `tests/`; this library only provides the
//! fixtures they have in common.

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::unwrap_used)] // test support code

use velvet_bean_storefront::catalog::Catalog;
use velvet_bean_storefront::models::Product;

/// A seeded catalog, the same one every session starts from.
#[must_use]
pub fn catalog() -> Catalog {
    Catalog::with_seed()
}

/// Fetch a seeded product by ID, panicking on a bad fixture ID.
#[must_use]
pub fn seeded_product(id: &str) -> Product {
    catalog()
        .get(&id.into())
        .unwrap_or_else(|| panic!("seed product {id} missing"))
        .clone()
}
