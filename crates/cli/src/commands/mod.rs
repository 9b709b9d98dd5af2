//! CLI command implementations.
//!
//! Each command opens the file storage under the configured data
//! directory, loads the stores it needs, performs one mutation or query,
//! and reports through tracing. Cart and session state persist across
//! invocations; catalog edits and signed-up identities last only for the
//! process, exactly like the demo they model.

pub mod account;
pub mod admin;
pub mod cart;
pub mod checkout;
pub mod menu;

use velvet_bean_storefront::cart::CartStore;
use velvet_bean_storefront::config::StorefrontConfig;
use velvet_bean_storefront::error::Result;
use velvet_bean_storefront::services::auth::{MockIdentityRepository, SessionStore};
use velvet_bean_storefront::storage::FileStorage;

/// Open the on-device storage for this configuration.
pub(crate) fn open_storage(config: &StorefrontConfig) -> Result<FileStorage> {
    Ok(FileStorage::new(config.data_dir.clone())?)
}

/// Load the cart store backed by file storage.
pub(crate) fn load_cart(config: &StorefrontConfig) -> Result<CartStore<FileStorage>> {
    Ok(CartStore::load(open_storage(config)?))
}

/// Load the session store backed by file storage and the seeded demo
/// identity list.
pub(crate) fn load_session(
    config: &StorefrontConfig,
) -> Result<SessionStore<FileStorage, MockIdentityRepository>> {
    Ok(SessionStore::load(
        open_storage(config)?,
        MockIdentityRepository::with_seed(),
    ))
}
