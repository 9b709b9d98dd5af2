//! Identity repository abstraction.
//!
//! The session store looks identities up through this trait instead of a
//! process-wide mutable list, so every test (and every session) can inject
//! a fresh instance.

use std::cell::RefCell;

use velvet_bean_core::{Email, UserId};

use crate::models::User;

/// Lookup/insert/update access to the known identities.
///
/// Single-threaded like everything else in this system; implementations
/// use interior mutability so a repository can be shared by reference
/// between a session store and the test observing it.
pub trait IdentityRepository {
    /// Find an identity by email, case-insensitive.
    fn find_by_email(&self, email: &str) -> Option<User>;

    /// Add a new identity. Process-lifetime only; never persisted.
    fn insert(&self, user: User);

    /// Replace the stored identity with a matching ID, if present.
    fn update(&self, user: &User);
}

impl<T: IdentityRepository + ?Sized> IdentityRepository for &T {
    fn find_by_email(&self, email: &str) -> Option<User> {
        (**self).find_by_email(email)
    }

    fn insert(&self, user: User) {
        (**self).insert(user);
    }

    fn update(&self, user: &User) {
        (**self).update(user);
    }
}

/// In-memory identity list seeded with the demo accounts.
#[derive(Debug, Default)]
pub struct MockIdentityRepository {
    users: RefCell<Vec<User>>,
}

impl MockIdentityRepository {
    /// Create a repository from an explicit identity list.
    #[must_use]
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: RefCell::new(users),
        }
    }

    /// Create a repository seeded with the two demo accounts:
    /// `admin@cafe.com` (admin, subscribed) and `user@example.com`.
    ///
    /// # Panics
    ///
    /// Never panics; the seeded addresses are statically valid.
    #[must_use]
    pub fn with_seed() -> Self {
        #[allow(clippy::unwrap_used)] // static addresses, validated by tests
        let users = vec![
            User {
                id: UserId::new("admin1"),
                name: "Admin User".to_string(),
                email: Email::parse("admin@cafe.com").unwrap(),
                is_admin: true,
                subscribed: true,
            },
            User {
                id: UserId::new("user1"),
                name: "Regular User".to_string(),
                email: Email::parse("user@example.com").unwrap(),
                is_admin: false,
                subscribed: false,
            },
        ];
        Self::new(users)
    }

    /// Number of identities currently known.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.borrow().len()
    }

    /// Whether the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.borrow().is_empty()
    }
}

impl IdentityRepository for MockIdentityRepository {
    fn find_by_email(&self, email: &str) -> Option<User> {
        self.users
            .borrow()
            .iter()
            .find(|u| u.email.matches(email))
            .cloned()
    }

    fn insert(&self, user: User) {
        self.users.borrow_mut().push(user);
    }

    fn update(&self, user: &User) {
        if let Some(existing) = self.users.borrow_mut().iter_mut().find(|u| u.id == user.id) {
            *existing = user.clone();
        }
    }
}
