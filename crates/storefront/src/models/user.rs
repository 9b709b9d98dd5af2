//! Identity domain type.

use serde::{Deserialize, Serialize};

use velvet_bean_core::{Email, UserId};

/// A storefront identity.
///
/// The session store holds at most one of these as the current identity;
/// none means a guest session. Demo accounts only, nothing here is a real
/// authentication principal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Stable user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Account email address.
    pub email: Email,
    /// Whether the identity may use the admin panel.
    pub is_admin: bool,
    /// Whether the identity is subscribed to the newsletter.
    pub subscribed: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_field_names_are_camel_case() {
        let user = User {
            id: UserId::new("admin1"),
            name: "Admin User".to_string(),
            email: Email::parse("admin@cafe.com").unwrap(),
            is_admin: true,
            subscribed: true,
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["isAdmin"], true);
        assert!(json.get("is_admin").is_none());
    }
}
