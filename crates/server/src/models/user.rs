//! User domain type.

use serde::{Deserialize, Serialize};

use storeboard_core::{Email, Role, StoreId, UserId};

/// A dashboard user.
///
/// `store_id` is only meaningful for [`Role::StoreOwner`]; when present it
/// references a store whose `owner_id` is this user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Login email address.
    pub email: Email,
    /// Postal address.
    pub address: String,
    /// The single role this user carries.
    pub role: Role,
    /// The store this user owns, for store owners that have one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_id: Option<StoreId>,
}
