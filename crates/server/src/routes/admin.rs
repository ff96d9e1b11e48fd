//! Admin overview route handlers.

use axum::{Json, extract::State};

use crate::middleware::RequireAdmin;
use crate::models::{DashboardCounts, Store, User};
use crate::state::AppState;

/// Platform-wide entity counts.
pub async fn dashboard(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> Json<DashboardCounts> {
    Json(state.repo().dashboard_counts().await)
}

/// All users.
pub async fn users(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> Json<Vec<User>> {
    Json(state.repo().list_users().await)
}

/// All stores, without aggregates.
pub async fn stores(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> Json<Vec<Store>> {
    Json(state.repo().list_stores().await)
}
