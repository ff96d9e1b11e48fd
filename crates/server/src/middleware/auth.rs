//! Authorization extractors.
//!
//! Each role-gated route group declares its allowed roles through one of the
//! `Require*` extractors. The access decision itself is the pure
//! [`storeboard_core::authorize`] function; these extractors only translate
//! its outcome into HTTP:
//!
//! - `Unauthenticated` redirects to the login entry point, recording the
//!   originally requested destination in a `next` query parameter.
//! - `Forbidden` also redirects to login - deliberately not a distinct 403,
//!   so probing a gated route reveals nothing about what lives behind it.

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use storeboard_core::{AuthorizationResult, Role, authorize};

use crate::models::{CurrentUser, session_keys};

/// Rejection for the `Require*` extractors: a redirect to the login entry
/// point, optionally carrying the originally requested destination.
pub struct AuthRedirect {
    next: Option<String>,
}

impl IntoResponse for AuthRedirect {
    fn into_response(self) -> Response {
        match self.next {
            Some(next) => Redirect::to(&format!("/login?next={next}")).into_response(),
            None => Redirect::to("/login").into_response(),
        }
    }
}

/// Read the current user from the session, if any.
async fn session_user(parts: &Parts) -> Option<CurrentUser> {
    let session = parts.extensions.get::<Session>()?;
    session
        .get::<CurrentUser>(session_keys::CURRENT_USER)
        .await
        .ok()
        .flatten()
}

/// Run the authorization gate for a route allowing `allowed` roles.
async fn require_role(parts: &Parts, allowed: &[Role]) -> Result<CurrentUser, AuthRedirect> {
    let user = session_user(parts).await;
    match authorize(user.as_ref().map(|u| u.role), allowed) {
        AuthorizationResult::Allowed => {
            // authorize() only allows a present identity.
            user.ok_or(AuthRedirect { next: None })
        }
        AuthorizationResult::Unauthenticated => Err(AuthRedirect {
            next: Some(parts.uri.path().to_string()),
        }),
        AuthorizationResult::Forbidden { role, .. } => {
            tracing::debug!(?role, path = %parts.uri.path(), "role not permitted, redirecting to login");
            Err(AuthRedirect { next: None })
        }
    }
}

/// Extractor requiring an [`Role::Admin`] identity.
pub struct RequireAdmin(pub CurrentUser);

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AuthRedirect;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        require_role(parts, &[Role::Admin]).await.map(Self)
    }
}

/// Extractor requiring a [`Role::RegularUser`] identity.
pub struct RequireRegularUser(pub CurrentUser);

impl<S> FromRequestParts<S> for RequireRegularUser
where
    S: Send + Sync,
{
    type Rejection = AuthRedirect;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        require_role(parts, &[Role::RegularUser]).await.map(Self)
    }
}

/// Extractor requiring a [`Role::StoreOwner`] identity.
pub struct RequireStoreOwner(pub CurrentUser);

impl<S> FromRequestParts<S> for RequireStoreOwner
where
    S: Send + Sync,
{
    type Rejection = AuthRedirect;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        require_role(parts, &[Role::StoreOwner]).await.map(Self)
    }
}

/// Extractor that optionally gets the current user.
///
/// Unlike the `Require*` extractors, this never rejects the request.
pub struct OptionalUser(pub Option<CurrentUser>);

impl<S> FromRequestParts<S> for OptionalUser
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(session_user(parts).await))
    }
}

/// Helper to set the current user in the session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_user(
    session: &Session,
    user: &CurrentUser,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CURRENT_USER, user).await
}

/// Helper to clear the current user from the session (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_user(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<CurrentUser>(session_keys::CURRENT_USER)
        .await?;
    Ok(())
}
