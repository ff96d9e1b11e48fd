//! Session-stored identity.

use serde::{Deserialize, Serialize};

use storeboard_core::{Email, Role, UserId};

use crate::models::User;

/// Keys used to store data in the session.
pub mod session_keys {
    /// The currently logged-in user.
    pub const CURRENT_USER: &str = "current_user";
}

/// The identity carried by a logged-in session.
///
/// A trimmed copy of [`User`] - enough to authorize routes and stamp
/// mutations without re-reading the repository on every request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Login email address.
    pub email: Email,
    /// The single role this user carries.
    pub role: Role,
}

impl From<&User> for CurrentUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
        }
    }
}
