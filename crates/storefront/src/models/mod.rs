//! Domain models.
//!
//! Serde attributes on these types define the persisted snapshot format:
//! camelCase field names, matching the blobs written by earlier versions of
//! the storefront.

pub mod cart;
pub mod order;
pub mod product;
pub mod user;

pub use cart::{CartLine, CartTotals};
pub use order::{CustomerContact, Order};
pub use product::Product;
pub use user::User;
