//! Unified error handling.
//!
//! Provides a unified `StoreError` type for callers (the CLI, a future web
//! frontend) that want one error to bubble. Nothing in this system is
//! fatal: every failure path leaves prior in-memory state unchanged.

use thiserror::Error;

use crate::checkout::CheckoutError;
use crate::config::ConfigError;
use crate::services::auth::AuthError;
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Configuration loading failed.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Storage backend operation failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Session/identity operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Checkout failed.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Caller is not authorized for the operation.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Bad input from the caller.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Result type alias for `StoreError`.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        let err = StoreError::NotFound("product 999".to_string());
        assert_eq!(err.to_string(), "Not found: product 999");

        let err = StoreError::Unauthorized("admin only".to_string());
        assert_eq!(err.to_string(), "Unauthorized: admin only");
    }

    #[test]
    fn test_from_auth_error() {
        let err: StoreError = AuthError::InvalidCredentials.into();
        assert!(matches!(err, StoreError::Auth(_)));
        assert_eq!(err.to_string(), "Auth error: invalid email or password");
    }

    #[test]
    fn test_from_checkout_error() {
        let err: StoreError = CheckoutError::EmptyCart.into();
        assert!(matches!(err, StoreError::Checkout(_)));
    }
}
