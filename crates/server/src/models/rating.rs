//! Rating domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storeboard_core::{RatingId, Score, StoreId, UserId};

use crate::models::Store;

/// A user's star rating of a store.
///
/// At most one record exists per (user, store) pair; resubmission updates
/// `score` and `created_at` in place, preserving `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    /// Unique rating ID.
    pub id: RatingId,
    /// The user who rated.
    pub user_id: UserId,
    /// The store that was rated.
    pub store_id: StoreId,
    /// The score, 1-5 stars. Wire name `rating`.
    #[serde(rename = "rating")]
    pub score: Score,
    /// When the rating was created or last updated.
    pub created_at: DateTime<Utc>,
}

/// A rating joined with the rater's display name, for the owner view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingWithRater {
    #[serde(flatten)]
    pub rating: Rating,
    /// Display name of the rater; "Unknown User" if the rater no longer
    /// resolves (should not occur, users are never deleted).
    pub user_name: String,
}

/// Everything the store-owner overview needs in one response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerDashboard {
    /// The owner's store.
    pub store: Store,
    /// Mean of all ratings for the store, 0.0 when none, one decimal place.
    pub avg_rating: f64,
    /// The store's ratings, newest first.
    pub ratings: Vec<RatingWithRater>,
}
