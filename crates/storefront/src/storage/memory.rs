//! In-memory storage backend for tests and ephemeral sessions.

use std::cell::RefCell;
use std::collections::HashMap;

use super::{Storage, StorageError, validate_key};

/// A `HashMap`-backed storage. Nothing survives the process.
///
/// Single-threaded by design, matching the stores it backs; interior
/// mutability keeps the [`Storage`] trait's `&self` signatures.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    blobs: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty in-memory storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        Ok(self.blobs.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        self.blobs
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        self.blobs.borrow_mut().remove(key);
        Ok(())
    }
}
