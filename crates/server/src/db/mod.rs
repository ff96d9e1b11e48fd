//! In-memory repository for users, stores, and ratings.
//!
//! The repository owns all mutable state behind a single `RwLock`. It is
//! constructed once per process with defined initialization (seed, or load
//! the persisted store collection) and passed by handle to every operation.
//!
//! # Semantics
//!
//! - Every operation sleeps for a configurable latency before touching
//!   state, simulating a network round-trip. Zero in tests keeps the suite
//!   fast and deterministic.
//! - Every operation returns snapshotted clones; callers never observe
//!   in-place mutation of returned structures.
//! - Mutations take the write lock, which serializes rating upserts and
//!   store creation. Conflict policy between concurrent writers is
//!   last-write-wins.
//! - Users and Stores are never deleted; Ratings are never deleted.

pub mod ratings;
pub mod seed;
pub mod stores;
pub mod users;

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::RwLock;

use storeboard_core::{RatingId, StoreId};

use crate::models::{DashboardCounts, Rating, Store, User, ValidationErrors};

/// Errors produced by repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The referenced entity does not exist.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// The operation conflicts with existing state.
    #[error("{0}")]
    Conflict(String),

    /// Input failed field-level validation. No state was mutated.
    #[error("validation failed")]
    Validation(ValidationErrors),
}

/// The three entity collections plus id counters for fresh identities.
#[derive(Debug)]
pub(crate) struct Collections {
    pub users: Vec<User>,
    pub stores: Vec<Store>,
    pub ratings: Vec<Rating>,
    next_store_id: i32,
    next_rating_id: i32,
}

impl Collections {
    pub(crate) fn new(users: Vec<User>, stores: Vec<Store>, ratings: Vec<Rating>) -> Self {
        let next_store_id = stores.iter().map(|s| s.id.as_i32()).max().unwrap_or(0) + 1;
        let next_rating_id = ratings.iter().map(|r| r.id.as_i32()).max().unwrap_or(0) + 1;
        Self {
            users,
            stores,
            ratings,
            next_store_id,
            next_rating_id,
        }
    }

    pub(crate) fn allocate_store_id(&mut self) -> StoreId {
        let id = StoreId::new(self.next_store_id);
        self.next_store_id += 1;
        id
    }

    pub(crate) fn allocate_rating_id(&mut self) -> RatingId {
        let id = RatingId::new(self.next_rating_id);
        self.next_rating_id += 1;
        id
    }
}

/// Handle to the dashboard's data store.
pub struct Repository {
    state: RwLock<Collections>,
    latency: Duration,
    store_file: Option<PathBuf>,
}

impl Repository {
    /// Open the repository: seed users and ratings, and load the store
    /// collection from `store_file` when one is configured and readable,
    /// falling back to seed stores otherwise.
    ///
    /// A missing file is seeded and written; an unreadable file is logged
    /// and replaced by seed data. The service starts either way.
    #[must_use]
    pub fn open(latency: Duration, store_file: Option<PathBuf>) -> Self {
        let stores = store_file
            .as_deref()
            .map_or_else(seed::stores, stores::load_or_seed);

        let repo = Self {
            state: RwLock::new(Collections::new(seed::users(), stores, seed::ratings())),
            latency,
            store_file,
        };
        tracing::info!(
            latency_ms = repo.latency.as_millis(),
            persisted = repo.store_file.is_some(),
            "repository initialized"
        );
        repo
    }

    /// Repository with seed data, no persistence, and no latency.
    #[must_use]
    pub fn for_tests() -> Self {
        Self::open(Duration::ZERO, None)
    }

    pub(crate) const fn state(&self) -> &RwLock<Collections> {
        &self.state
    }

    pub(crate) fn store_file(&self) -> Option<&std::path::Path> {
        self.store_file.as_deref()
    }

    /// Suspend the caller for the configured latency.
    pub(crate) async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    /// Platform-wide entity counts for the admin overview.
    pub async fn dashboard_counts(&self) -> DashboardCounts {
        self.simulate_latency().await;
        let state = self.state.read().await;
        DashboardCounts {
            user_count: state.users.len(),
            store_count: state.stores.len(),
            rating_count: state.ratings.len(),
        }
    }
}
