//! HTTP route handlers for the dashboard service.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                        - Redirect to the caller's default route
//! GET  /health                  - Health check (in lib.rs)
//!
//! # Auth
//! POST /auth/login              - Log in by email (no credential check)
//! POST /auth/logout             - Log out
//! GET  /auth/me                 - Current session identity
//!
//! # Admin (Role::Admin)
//! GET  /admin/dashboard         - Platform counts
//! GET  /admin/users             - All users
//! GET  /admin/stores            - All stores
//!
//! # Store browsing (Role::RegularUser)
//! GET  /dashboard/stores        - Stores with aggregates and own rating
//! POST /dashboard/stores/{id}/rating - Submit or update a rating
//!
//! # Store owner (Role::StoreOwner)
//! GET  /store-owner/dashboard   - Own store, average, ratings newest-first
//! POST /store-owner/stores      - Create a store (validated)
//! ```

pub mod admin;
pub mod auth;
pub mod owner;
pub mod stores;

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};

use crate::middleware::OptionalUser;
use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me))
}

/// Create the admin routes router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(admin::dashboard))
        .route("/users", get(admin::users))
        .route("/stores", get(admin::stores))
}

/// Create the store-browsing routes router.
pub fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/stores", get(stores::index))
        .route("/stores/{id}/rating", post(stores::rate))
}

/// Create the store-owner routes router.
pub fn owner_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(owner::dashboard))
        .route("/stores", post(owner::create_store))
}

/// Create all routes for the dashboard service.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .nest("/auth", auth_routes())
        .nest("/admin", admin_routes())
        .nest("/dashboard", dashboard_routes())
        .nest("/store-owner", owner_routes())
}

/// Send the caller to their role's default landing route, or to login.
async fn home(OptionalUser(user): OptionalUser) -> Redirect {
    let target = user.map_or("/login", |u| u.role.default_route());
    Redirect::to(target)
}
