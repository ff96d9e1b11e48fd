//! Store browsing and rating submission for regular users.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;

use storeboard_core::{Score, StoreId};

use crate::error::{AppError, Result};
use crate::middleware::RequireRegularUser;
use crate::models::{Rating, StoreWithAggregate};
use crate::state::AppState;

/// All stores with their average rating and the caller's own rating.
pub async fn index(
    RequireRegularUser(user): RequireRegularUser,
    State(state): State<AppState>,
) -> Json<Vec<StoreWithAggregate>> {
    Json(state.repo().list_stores_with_aggregates(user.id).await)
}

/// Rating submission body. Wire name `rating`.
#[derive(Debug, Deserialize)]
pub struct RateRequest {
    pub rating: u8,
}

/// Submit or update the caller's rating for a store.
///
/// The caller's identity comes from the session; the (user, store) pair is
/// upserted, so resubmission never creates a duplicate.
///
/// # Errors
///
/// Returns 422 for a score outside `[1, 5]` and 404 for an unknown store.
pub async fn rate(
    RequireRegularUser(user): RequireRegularUser,
    State(state): State<AppState>,
    Path(store_id): Path<StoreId>,
    Json(body): Json<RateRequest>,
) -> Result<Json<Rating>> {
    let score =
        Score::new(body.rating).map_err(|e| AppError::invalid_field("rating", e.to_string()))?;

    let rating = state.repo().submit_rating(user.id, store_id, score).await?;
    tracing::info!(user_id = %user.id, store_id = %store_id, score = %score, "rating submitted");

    Ok(Json(rating))
}
