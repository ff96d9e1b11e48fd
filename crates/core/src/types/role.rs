//! User roles and their default landing routes.

use serde::{Deserialize, Serialize};

/// The role attached to an authenticated identity.
///
/// Every user carries exactly one role. The role determines which routes are
/// visible and the default landing page after login.
///
/// Wire values are `admin`, `user`, and `store_owner`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Full visibility: user list, store list, platform counts.
    #[serde(rename = "admin")]
    Admin,
    /// Browses stores and submits ratings.
    #[serde(rename = "user")]
    RegularUser,
    /// Views aggregate ratings for their own store.
    #[serde(rename = "store_owner")]
    StoreOwner,
}

impl Role {
    /// The default post-login landing route for this role.
    ///
    /// This is a total mapping: the enum is closed, so there is no
    /// "unrecognized role" arm. Unauthenticated visitors land on `/login`
    /// before any role is known.
    #[must_use]
    pub const fn default_route(self) -> &'static str {
        match self {
            Self::Admin => "/admin/dashboard",
            Self::RegularUser => "/dashboard",
            Self::StoreOwner => "/store-owner/dashboard",
        }
    }

    /// Human-readable label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Admin => "Administrator",
            Self::RegularUser => "User",
            Self::StoreOwner => "Store Owner",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_routes() {
        assert_eq!(Role::Admin.default_route(), "/admin/dashboard");
        assert_eq!(Role::RegularUser.default_route(), "/dashboard");
        assert_eq!(Role::StoreOwner.default_route(), "/store-owner/dashboard");
    }

    #[test]
    fn test_serde_wire_values() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(
            serde_json::to_string(&Role::RegularUser).unwrap(),
            "\"user\""
        );
        assert_eq!(
            serde_json::to_string(&Role::StoreOwner).unwrap(),
            "\"store_owner\""
        );

        let role: Role = serde_json::from_str("\"store_owner\"").unwrap();
        assert_eq!(role, Role::StoreOwner);
    }
}
