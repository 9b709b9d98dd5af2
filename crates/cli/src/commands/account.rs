//! Session and account commands.

use tracing::info;

use velvet_bean_storefront::config::StorefrontConfig;
use velvet_bean_storefront::error::Result;

use super::load_session;

/// Log in with a demo account.
///
/// # Errors
///
/// Returns `StoreError::Auth` with a generic credential failure on any
/// mismatch.
pub fn login(config: &StorefrontConfig, email: &str, password: &str) -> Result<()> {
    let mut session = load_session(config)?;
    let user = session.login(email, password)?;
    info!("Welcome back, {}!", user.name);
    Ok(())
}

/// Create a new account and log in.
///
/// The account lives only for this process; the session itself persists.
///
/// # Errors
///
/// Returns `StoreError::Auth` if the email is taken or the input is
/// malformed.
pub fn signup(config: &StorefrontConfig, name: &str, email: &str, password: &str) -> Result<()> {
    let mut session = load_session(config)?;
    let user = session.signup(name, email, password)?;
    info!("Welcome to our cafe, {}!", user.name);
    Ok(())
}

/// Log out of the current session.
///
/// # Errors
///
/// Returns `StoreError::Storage` if the data directory cannot be opened.
pub fn logout(config: &StorefrontConfig) -> Result<()> {
    let mut session = load_session(config)?;
    session.logout();
    info!("You have been logged out");
    Ok(())
}

/// Show the current identity.
///
/// # Errors
///
/// Returns `StoreError::Storage` if the data directory cannot be opened.
pub fn whoami(config: &StorefrontConfig) -> Result<()> {
    let session = load_session(config)?;
    match session.current_user() {
        Some(user) => {
            info!("{} <{}>", user.name, user.email);
            if user.is_admin {
                info!("  admin account");
            }
            if user.subscribed {
                info!("  subscribed to the newsletter");
            }
        }
        None => info!("Not logged in (guest session)"),
    }
    Ok(())
}

/// Subscribe an email to the newsletter.
///
/// Guest subscriptions report success without keeping a record.
///
/// # Errors
///
/// Returns `StoreError::Storage` if the data directory cannot be opened.
pub fn subscribe(config: &StorefrontConfig, email: &str) -> Result<()> {
    let mut session = load_session(config)?;
    session.subscribe_to_newsletter(email);
    info!("Thank you for subscribing to our newsletter!");
    Ok(())
}
