//! Integration tests for Storeboard.
//!
//! Each test spawns the server in-process on an ephemeral port with zero
//! simulated latency and a fresh seeded repository, then drives it over real
//! HTTP with a cookie-holding client. Redirects are never followed, so the
//! authorization gate's redirect targets can be asserted directly.
//!
//! # Test Categories
//!
//! - `auth_flow` - Login, logout, session identity, role landing routes
//! - `authorization` - Role-gated route redirects
//! - `ratings` - Store browsing, aggregates, and the rating upsert
//! - `store_creation` - Owner dashboard and validated store creation

use storeboard_server::{app, config::ServerConfig, state::AppState};

/// Seed login emails.
pub mod seed_users {
    pub const ADMIN: &str = "admin@example.com";
    pub const JOHN: &str = "john.doe@example.com";
    pub const JANE: &str = "jane.smith@example.com";
    pub const ALICE_OWNER: &str = "alice.owner@example.com";
    pub const CAROL_OWNER_NO_STORE: &str = "carol.vendor@example.com";
}

/// A server spawned in-process for one test.
pub struct TestServer {
    base_url: String,
}

impl TestServer {
    /// Bind an ephemeral port, spawn the server on it, and return a handle.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn spawn() -> Self {
        let state = AppState::new(ServerConfig::for_tests());
        let router = app(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind test listener");
        let addr = listener.local_addr().expect("listener has a local addr");

        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("test server error");
        });

        Self {
            base_url: format!("http://{addr}"),
        }
    }

    /// Absolute URL for a path on this server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// A client with a cookie store and redirect-following disabled.
///
/// # Panics
///
/// Panics if the client cannot be constructed.
#[must_use]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("failed to create HTTP client")
}

/// Log `email` in on `server`, asserting success, and return the response
/// body.
///
/// # Panics
///
/// Panics if the request fails or the login is rejected.
pub async fn login(client: &reqwest::Client, server: &TestServer, email: &str) -> serde_json::Value {
    let resp = client
        .post(server.url("/auth/login"))
        .json(&serde_json::json!({ "email": email }))
        .send()
        .await
        .expect("login request failed");
    assert!(
        resp.status().is_success(),
        "login as {email} failed with {}",
        resp.status()
    );
    resp.json().await.expect("login response is JSON")
}
