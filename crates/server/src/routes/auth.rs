//! Authentication route handlers.
//!
//! "Login" selects an existing user by email with no credential check, a
//! demo stand-in. A real credential model is out of scope.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::error::{AppError, Result};
use crate::middleware::{OptionalUser, clear_current_user, set_current_user};
use crate::models::{CurrentUser, User};
use crate::state::AppState;

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
}

/// Successful login response: the user plus their default landing route.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user: User,
    /// Where the client should navigate next, a pure function of role.
    pub redirect: &'static str,
}

/// Handle login by email.
///
/// # Errors
///
/// Returns 404 when no account matches the email.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let Some(user) = state.repo().authenticate(&body.email).await else {
        return Err(AppError::NotFound(
            "no account matches that email".to_string(),
        ));
    };

    set_current_user(&session, &CurrentUser::from(&user))
        .await
        .map_err(|e| AppError::Internal(format!("failed to write session: {e}")))?;

    tracing::info!(user_id = %user.id, role = ?user.role, "user logged in");

    Ok(Json(LoginResponse {
        redirect: user.role.default_route(),
        user,
    }))
}

/// Handle logout: clear the session identity.
///
/// # Errors
///
/// Returns an internal error if the session cannot be modified.
pub async fn logout(session: Session) -> Result<axum::http::StatusCode> {
    clear_current_user(&session)
        .await
        .map_err(|e| AppError::Internal(format!("failed to clear session: {e}")))?;
    Ok(axum::http::StatusCode::NO_CONTENT)
}

/// Return the current session identity.
///
/// # Errors
///
/// Returns 401 when no session identity is present.
pub async fn me(OptionalUser(user): OptionalUser) -> Result<Json<CurrentUser>> {
    user.map(Json)
        .ok_or_else(|| AppError::Unauthorized("not logged in".to_string()))
}
