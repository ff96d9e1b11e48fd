//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::db::Repository;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// repository and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    repo: Repository,
}

impl AppState {
    /// Create the application state, opening the repository according to the
    /// configuration (seed-or-load, simulated latency).
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let repo = Repository::open(config.latency, config.store_file.clone());
        Self {
            inner: Arc::new(AppStateInner { config, repo }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the repository.
    #[must_use]
    pub fn repo(&self) -> &Repository {
        &self.inner.repo
    }
}
