//! Authentication error types.

use thiserror::Error;

/// Errors that can occur during session/identity operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] velvet_bean_core::EmailError),

    /// Invalid credentials. Deliberately covers both "unknown email" and
    /// "wrong password" so failures reveal nothing about which one it was.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// An account with this email already exists.
    #[error("an account with this email already exists")]
    EmailTaken,

    /// Password too weak or invalid.
    #[error("password validation failed: {0}")]
    WeakPassword(String),

    /// Name missing or too short.
    #[error("name validation failed: {0}")]
    InvalidName(String),
}
