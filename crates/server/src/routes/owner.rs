//! Store-owner route handlers.

use axum::{Json, extract::State, http::StatusCode};

use crate::error::Result;
use crate::middleware::RequireStoreOwner;
use crate::models::{OwnerDashboard, Store, StoreDraft};
use crate::state::AppState;

/// The owner's store with its aggregate and ratings, newest first.
///
/// An owner without a store gets a JSON `null` body - absent, not an error;
/// the client shows a create-store call to action.
pub async fn dashboard(
    RequireStoreOwner(user): RequireStoreOwner,
    State(state): State<AppState>,
) -> Json<Option<OwnerDashboard>> {
    Json(state.repo().owner_dashboard(user.id).await)
}

/// Create a store owned by the caller.
///
/// # Errors
///
/// Returns 422 with a field-to-message map when validation fails, and 409
/// when the caller already owns a store.
pub async fn create_store(
    RequireStoreOwner(user): RequireStoreOwner,
    State(state): State<AppState>,
    Json(draft): Json<StoreDraft>,
) -> Result<(StatusCode, Json<Store>)> {
    let store = state.repo().create_store(&draft, user.id).await?;
    tracing::info!(owner_id = %user.id, store_id = %store.id, "store created");
    Ok((StatusCode::CREATED, Json(store)))
}
