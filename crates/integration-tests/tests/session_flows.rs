//! Session and identity flows across "reloads".

#![allow(clippy::unwrap_used)]

use velvet_bean_storefront::services::auth::{
    AuthError, MockIdentityRepository, SessionStore,
};
use velvet_bean_storefront::storage::{FileStorage, Storage, keys};

fn storage() -> (tempfile::TempDir, FileStorage) {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path()).unwrap();
    (dir, storage)
}

#[test]
fn login_persists_identity_across_reloads() {
    let (_dir, storage) = storage();

    {
        let mut session =
            SessionStore::load(storage.clone(), MockIdentityRepository::with_seed());
        let user = session.login("admin@cafe.com", "password").unwrap();
        assert!(user.is_admin);
    }

    // A new session over the same storage rehydrates the identity even
    // though the repository instance is fresh.
    let session = SessionStore::load(storage, MockIdentityRepository::with_seed());
    assert!(session.is_authenticated());
    assert!(session.is_admin());
}

#[test]
fn failed_login_never_touches_persisted_state() {
    let (_dir, storage) = storage();

    {
        let mut session =
            SessionStore::load(storage.clone(), MockIdentityRepository::with_seed());
        session.login("user@example.com", "password").unwrap();
    }

    {
        let mut session =
            SessionStore::load(storage.clone(), MockIdentityRepository::with_seed());
        let result = session.login("admin@cafe.com", "wrong");
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
        // The previously persisted identity is still current.
        assert_eq!(
            session.current_user().unwrap().email.as_str(),
            "user@example.com"
        );
    }

    let session = SessionStore::load(storage, MockIdentityRepository::with_seed());
    assert_eq!(
        session.current_user().unwrap().email.as_str(),
        "user@example.com"
    );
}

#[test]
fn logout_removes_the_persisted_blob() {
    let (_dir, storage) = storage();

    let mut session = SessionStore::load(storage.clone(), MockIdentityRepository::with_seed());
    session.login("admin@cafe.com", "password").unwrap();
    assert!(storage.get(keys::CURRENT_USER).unwrap().is_some());

    session.logout();
    assert!(storage.get(keys::CURRENT_USER).unwrap().is_none());

    let session = SessionStore::load(storage, MockIdentityRepository::with_seed());
    assert!(!session.is_authenticated());
}

#[test]
fn signed_up_identity_does_not_outlive_the_repository() {
    let (_dir, storage) = storage();

    {
        let mut session =
            SessionStore::load(storage.clone(), MockIdentityRepository::with_seed());
        session
            .signup("New Person", "new@example.com", "password")
            .unwrap();
        session.logout();
    }

    // A fresh repository (new "process") no longer knows the account,
    // matching the original demo where signups were in-memory only.
    let mut session = SessionStore::load(storage, MockIdentityRepository::with_seed());
    let result = session.login("new@example.com", "password");
    assert!(matches!(result, Err(AuthError::InvalidCredentials)));
}

#[test]
fn persisted_signup_identity_still_rehydrates() {
    let (_dir, storage) = storage();

    {
        let mut session =
            SessionStore::load(storage.clone(), MockIdentityRepository::with_seed());
        session
            .signup("New Person", "new@example.com", "password")
            .unwrap();
    }

    // The current-identity blob is independent of the repository, so the
    // signed-up user is still logged in after a reload.
    let session = SessionStore::load(storage, MockIdentityRepository::with_seed());
    assert!(session.is_authenticated());
    assert_eq!(session.current_user().unwrap().name, "New Person");
}
