//! Role-based route authorization.
//!
//! A route declares the set of roles permitted to view it; [`authorize`]
//! decides whether an identity may proceed. The decision is a plain value -
//! the presentation layer (HTTP extractors in the server crate) chooses what
//! each outcome turns into, which keeps the policy testable without a router.

use crate::types::Role;

/// Outcome of checking an identity against a route's allowed roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorizationResult {
    /// The identity carries a permitted role.
    Allowed,
    /// No identity is present; the caller should be sent to login, recording
    /// the originally requested destination.
    Unauthenticated,
    /// An identity is present but its role is not permitted.
    Forbidden {
        /// The role the identity carries.
        role: Role,
        /// The roles the route permits.
        required: Vec<Role>,
    },
}

impl AuthorizationResult {
    /// Whether the check passed.
    #[must_use]
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }
}

/// Check an optional identity against a route's allowed role set.
#[must_use]
pub fn authorize(identity: Option<Role>, allowed: &[Role]) -> AuthorizationResult {
    match identity {
        None => AuthorizationResult::Unauthenticated,
        Some(role) if allowed.contains(&role) => AuthorizationResult::Allowed,
        Some(role) => AuthorizationResult::Forbidden {
            role,
            required: allowed.to_vec(),
        },
    }
}
