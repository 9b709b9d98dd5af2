//! Session and identity store.
//!
//! Demo-only authentication against an injected identity repository. The
//! credential check is a fixed sentinel password shared by every demo
//! account; nothing here is a real auth scheme.

mod error;
mod repository;

pub use error::AuthError;
pub use repository::{IdentityRepository, MockIdentityRepository};

use tracing::{debug, info, warn};

use velvet_bean_core::Email;

use crate::models::User;
use crate::storage::{Storage, keys};

/// The fixed demo credential every seeded account accepts.
pub const DEMO_PASSWORD: &str = "password";

/// Minimum password length accepted at signup.
const MIN_PASSWORD_LENGTH: usize = 6;

/// Minimum display-name length accepted at signup.
const MIN_NAME_LENGTH: usize = 2;

/// Session/identity store for one session.
///
/// Holds at most one current identity, persisted to on-device storage
/// across reloads. Lookups go through the injected [`IdentityRepository`]
/// so tests can substitute a fresh instance instead of sharing
/// process-wide state.
#[derive(Debug)]
pub struct SessionStore<S: Storage, R: IdentityRepository> {
    storage: S,
    identities: R,
    current: Option<User>,
}

impl<S: Storage, R: IdentityRepository> SessionStore<S, R> {
    /// Create a session store, rehydrating any persisted identity.
    ///
    /// A missing blob, an unreadable backend, or a corrupt snapshot all
    /// start the session as a guest; nothing here is fatal.
    pub fn load(storage: S, identities: R) -> Self {
        let current = match storage.get(keys::CURRENT_USER) {
            Ok(Some(blob)) => match serde_json::from_str::<User>(&blob) {
                Ok(user) => Some(user),
                Err(e) => {
                    warn!(error = %e, "Corrupt identity snapshot, starting as guest");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "Failed to read identity snapshot, starting as guest");
                None
            }
        };

        debug!(authenticated = current.is_some(), "Session store loaded");
        Self {
            storage,
            identities,
            current,
        }
    }

    /// Log in with an email and the demo password.
    ///
    /// The email lookup is case-insensitive. On success the matched
    /// identity becomes current and is persisted.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` on any mismatch, leaving
    /// the current identity untouched.
    pub fn login(&mut self, email: &str, password: &str) -> Result<User, AuthError> {
        if password != DEMO_PASSWORD {
            return Err(AuthError::InvalidCredentials);
        }

        let user = self
            .identities
            .find_by_email(email)
            .ok_or(AuthError::InvalidCredentials)?;

        info!(user_id = %user.id, "Login successful");
        self.set_current(user.clone());
        Ok(user)
    }

    /// Create a new account and adopt it as the current identity.
    ///
    /// The new identity is non-admin and non-subscribed, lives in the
    /// repository for the process lifetime only, and is persisted as the
    /// current identity.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::EmailTaken` if the email already exists
    /// (case-insensitive), `AuthError::InvalidEmail`/`WeakPassword`/
    /// `InvalidName` on malformed input. Failure leaves the current
    /// identity untouched.
    pub fn signup(&mut self, name: &str, email: &str, password: &str) -> Result<User, AuthError> {
        let name = name.trim();
        if name.chars().count() < MIN_NAME_LENGTH {
            return Err(AuthError::InvalidName(format!(
                "name must be at least {MIN_NAME_LENGTH} characters"
            )));
        }

        let email = Email::parse(email)?;

        if password.len() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::WeakPassword(format!(
                "password must be at least {MIN_PASSWORD_LENGTH} characters"
            )));
        }

        if self.identities.find_by_email(email.as_str()).is_some() {
            return Err(AuthError::EmailTaken);
        }

        let user = User {
            id: velvet_bean_core::UserId::new(uuid::Uuid::new_v4().to_string()),
            name: name.to_string(),
            email,
            is_admin: false,
            subscribed: false,
        };

        info!(user_id = %user.id, "Signup successful");
        self.identities.insert(user.clone());
        self.set_current(user.clone());
        Ok(user)
    }

    /// Log out: clear the current identity and its persisted copy.
    pub fn logout(&mut self) {
        if let Some(user) = self.current.take() {
            info!(user_id = %user.id, "Logged out");
        }
        if let Err(e) = self.storage.remove(keys::CURRENT_USER) {
            warn!(error = %e, "Failed to remove identity snapshot");
        }
    }

    /// Subscribe an email address to the newsletter.
    ///
    /// If the current identity's email matches (case-insensitive), its
    /// `subscribed` flag is set and persisted. Anything else is a guest
    /// subscription: reported as success, no record kept.
    pub fn subscribe_to_newsletter(&mut self, email: &str) {
        match &mut self.current {
            Some(user) if user.email.matches(email) => {
                user.subscribed = true;
                let updated = user.clone();
                self.identities.update(&updated);
                self.persist();
                info!(user_id = %updated.id, "Newsletter subscription recorded");
            }
            _ => {
                // Guest subscription: no record kept.
                info!("Guest newsletter subscription");
            }
        }
    }

    /// The current identity, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    /// Whether an identity is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Whether the current identity is an admin.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.current.as_ref().is_some_and(|u| u.is_admin)
    }

    fn set_current(&mut self, user: User) {
        self.current = Some(user);
        self.persist();
    }

    /// Write the current identity snapshot to storage.
    ///
    /// A storage failure leaves the in-memory identity authoritative for
    /// the rest of the session.
    fn persist(&self) {
        let Some(user) = &self.current else { return };
        let blob = match serde_json::to_string(user) {
            Ok(blob) => blob,
            Err(e) => {
                warn!(error = %e, "Failed to serialize identity snapshot");
                return;
            }
        };
        if let Err(e) = self.storage.set(keys::CURRENT_USER, &blob) {
            warn!(error = %e, "Failed to persist identity snapshot");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::storage::MemoryStorage;

    use super::*;

    fn fresh_session() -> SessionStore<MemoryStorage, MockIdentityRepository> {
        SessionStore::load(MemoryStorage::new(), MockIdentityRepository::with_seed())
    }

    #[test]
    fn test_login_admin_succeeds() {
        let mut session = fresh_session();
        let user = session.login("admin@cafe.com", "password").unwrap();
        assert!(user.is_admin);

        assert!(session.is_authenticated());
        assert!(session.is_admin());
    }

    #[test]
    fn test_login_is_case_insensitive_on_email() {
        let mut session = fresh_session();
        assert!(session.login("ADMIN@CAFE.COM", "password").is_ok());
    }

    #[test]
    fn test_login_wrong_password_fails_without_mutation() {
        let mut session = fresh_session();
        let result = session.login("admin@cafe.com", "wrong");

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_login_unknown_email_same_error_as_wrong_password() {
        let mut session = fresh_session();
        let unknown = session.login("nobody@cafe.com", "password");
        let wrong = session.login("admin@cafe.com", "wrong");

        // Both collapse to the same variant; no enumeration signal.
        assert!(matches!(unknown, Err(AuthError::InvalidCredentials)));
        assert!(matches!(wrong, Err(AuthError::InvalidCredentials)));
    }

    #[test]
    fn test_signup_adopts_new_identity() {
        let mut session = fresh_session();
        let user = session
            .signup("New Person", "new@example.com", "password")
            .unwrap();

        assert!(!user.is_admin);
        assert!(!user.subscribed);
        assert_eq!(user.name, "New Person");
        assert!(session.is_authenticated());
        assert!(!session.is_admin());
    }

    #[test]
    fn test_signup_existing_email_fails_without_mutation() {
        let mut session = fresh_session();
        let result = session.signup("Someone", "USER@example.com", "password");

        assert!(matches!(result, Err(AuthError::EmailTaken)));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_signup_validates_input() {
        let mut session = fresh_session();
        assert!(matches!(
            session.signup("A", "new@example.com", "password"),
            Err(AuthError::InvalidName(_))
        ));
        assert!(matches!(
            session.signup("New Person", "not-an-email", "password"),
            Err(AuthError::InvalidEmail(_))
        ));
        assert!(matches!(
            session.signup("New Person", "new@example.com", "abc"),
            Err(AuthError::WeakPassword(_))
        ));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_signup_then_login_with_new_account() {
        let repo = MockIdentityRepository::with_seed();
        let storage = MemoryStorage::new();

        let mut session = SessionStore::load(&storage, &repo);
        session
            .signup("New Person", "new@example.com", "password")
            .unwrap();
        session.logout();

        // The repository kept the identity for the process lifetime.
        let mut session = SessionStore::load(&storage, &repo);
        assert!(session.login("new@example.com", "password").is_ok());
    }

    #[test]
    fn test_logout_clears_identity_and_blob() {
        let storage = MemoryStorage::new();
        let mut session = SessionStore::load(&storage, MockIdentityRepository::with_seed());
        session.login("admin@cafe.com", "password").unwrap();
        session.logout();

        assert!(!session.is_authenticated());
        assert!(storage.get(keys::CURRENT_USER).unwrap().is_none());
    }

    #[test]
    fn test_identity_persists_across_reloads() {
        let storage = MemoryStorage::new();
        {
            let mut session = SessionStore::load(&storage, MockIdentityRepository::with_seed());
            session.login("user@example.com", "password").unwrap();
        }

        let session = SessionStore::load(&storage, MockIdentityRepository::with_seed());
        assert!(session.is_authenticated());
        assert!(!session.is_admin());
        assert_eq!(
            session.current_user().unwrap().email.as_str(),
            "user@example.com"
        );
    }

    #[test]
    fn test_corrupt_identity_snapshot_starts_as_guest() {
        let storage = MemoryStorage::new();
        storage.set(keys::CURRENT_USER, "{broken").unwrap();

        let session = SessionStore::load(&storage, MockIdentityRepository::with_seed());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_subscribe_matching_email_sets_flag() {
        let mut session = fresh_session();
        session.login("user@example.com", "password").unwrap();
        session.subscribe_to_newsletter("User@Example.com");

        assert!(session.current_user().unwrap().subscribed);
    }

    #[test]
    fn test_subscribe_guest_is_noop_success() {
        let mut session = fresh_session();
        session.subscribe_to_newsletter("guest@example.com");
        assert!(!session.is_authenticated());

        session.login("user@example.com", "password").unwrap();
        session.subscribe_to_newsletter("other@example.com");
        // Mismatched email leaves the current identity unchanged.
        assert!(!session.current_user().unwrap().subscribed);
    }

    #[test]
    fn test_subscription_survives_reload() {
        let storage = MemoryStorage::new();
        {
            let mut session = SessionStore::load(&storage, MockIdentityRepository::with_seed());
            session.login("user@example.com", "password").unwrap();
            session.subscribe_to_newsletter("user@example.com");
        }

        let session = SessionStore::load(&storage, MockIdentityRepository::with_seed());
        assert!(session.current_user().unwrap().subscribed);
    }
}
