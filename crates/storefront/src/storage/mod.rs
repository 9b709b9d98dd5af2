//! On-device storage for persisted store snapshots.
//!
//! The stores persist two keyed string blobs: the serialized cart snapshot
//! and the serialized current identity. Blobs are overwritten wholesale on
//! each mutation and removed on clear/logout. Backends implement the
//! [`Storage`] trait; [`FileStorage`] is the real on-device backend and
//! [`MemoryStorage`] backs tests and ephemeral sessions.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use thiserror::Error;

/// Storage keys for persisted state.
pub mod keys {
    /// Key for the serialized cart snapshot.
    pub const CART: &str = "cart";

    /// Key for the serialized current identity.
    pub const CURRENT_USER: &str = "currentUser";
}

/// Errors that can occur reading or writing a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failure.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The key is not usable by this backend.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),
}

/// A keyed string-blob store.
///
/// Every operation is synchronous and atomically visible to the next read;
/// there is no concurrent writer in this system.
pub trait Storage {
    /// Read the blob stored under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read at all. A
    /// missing blob is `Ok(None)`, not an error.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the blob stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write fails.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the blob stored under `key`. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the removal fails.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: Storage + ?Sized> Storage for &T {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// Reject keys that could escape the backing directory.
///
/// Keys name blobs, not paths; anything with a separator or relative
/// component is refused.
pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    if key.is_empty()
        || key.contains('/')
        || key.contains('\\')
        || key.contains("..")
        || key.contains('\0')
    {
        return Err(StorageError::InvalidKey(key.to_owned()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key_accepts_plain_names() {
        assert!(validate_key("cart").is_ok());
        assert!(validate_key("currentUser").is_ok());
    }

    #[test]
    fn test_validate_key_rejects_path_like_keys() {
        assert!(validate_key("").is_err());
        assert!(validate_key("../cart").is_err());
        assert!(validate_key("a/b").is_err());
        assert!(validate_key("a\\b").is_err());
    }
}
