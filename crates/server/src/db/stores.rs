//! Store repository operations and the store persistence boundary.
//!
//! Only the store collection survives restarts. It is written as JSON to the
//! configured file after every creation; users and ratings always reset to
//! seed data on startup.

use std::path::Path;

use storeboard_core::UserId;

use crate::db::{Repository, RepositoryError, seed};
use crate::models::{Store, StoreDraft};

/// Load the persisted store collection, seeding the file when it is missing
/// or unreadable.
pub(crate) fn load_or_seed(path: &Path) -> Vec<Store> {
    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_json::from_str(&contents) {
            Ok(stores) => {
                tracing::info!(path = %path.display(), "loaded persisted stores");
                stores
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "persisted stores unreadable, reseeding");
                let stores = seed::stores();
                persist(path, &stores);
                stores
            }
        },
        Err(_) => {
            let stores = seed::stores();
            persist(path, &stores);
            stores
        }
    }
}

/// Write the store collection to disk. Failures are logged, not propagated:
/// the in-memory state is already updated and the request should not fail
/// because the persistence file is unwritable.
pub(crate) fn persist(path: &Path, stores: &[Store]) {
    let json = match serde_json::to_string_pretty(stores) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!(error = %e, "failed to serialize stores");
            return;
        }
    };
    if let Err(e) = std::fs::write(path, json) {
        tracing::warn!(path = %path.display(), error = %e, "failed to persist stores");
    }
}

impl Repository {
    /// All stores, in insertion order.
    pub async fn list_stores(&self) -> Vec<Store> {
        self.simulate_latency().await;
        let state = self.state().read().await;
        state.stores.clone()
    }

    /// Create a store for `owner_id` after validating the draft.
    ///
    /// The new store's ownership is fixed at creation; the owner's
    /// `store_id` back-reference is set in the same mutation.
    ///
    /// # Errors
    ///
    /// - [`RepositoryError::Validation`] with one message per invalid field;
    ///   no state is mutated.
    /// - [`RepositoryError::NotFound`] if the owner does not exist.
    /// - [`RepositoryError::Conflict`] if the owner already has a store.
    pub async fn create_store(
        &self,
        draft: &StoreDraft,
        owner_id: UserId,
    ) -> Result<Store, RepositoryError> {
        self.simulate_latency().await;
        let email = draft.validate().map_err(RepositoryError::Validation)?;

        let mut state = self.state().write().await;

        if !state.users.iter().any(|u| u.id == owner_id) {
            return Err(RepositoryError::NotFound("owner"));
        }
        if state.stores.iter().any(|s| s.owner_id == owner_id) {
            return Err(RepositoryError::Conflict(
                "owner already has a store".to_string(),
            ));
        }

        let store = Store {
            id: state.allocate_store_id(),
            name: draft.name.clone(),
            email,
            address: draft.address.clone(),
            owner_id,
        };
        state.stores.push(store.clone());

        if let Some(user) = state.users.iter_mut().find(|u| u.id == owner_id) {
            user.store_id = Some(store.id);
        }

        if let Some(path) = self.store_file() {
            persist(path, &state.stores);
        }

        Ok(store)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::path::PathBuf;
    use std::time::Duration;

    use storeboard_core::StoreId;

    use super::*;

    fn valid_draft() -> StoreDraft {
        StoreDraft {
            name: "Jane's Wonderful Widget Shop".to_string(),
            email: "widgets@example.com".to_string(),
            address: "12 Widget Way, Town".to_string(),
        }
    }

    /// Seed user 6 (Carol Vendor) is a store owner without a store.
    const OWNERLESS_USER: UserId = UserId::new(6);

    fn temp_store_file(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("storeboard-{}-{tag}.json", std::process::id()))
    }

    #[tokio::test]
    async fn test_create_store_appends_and_links_owner() {
        let repo = Repository::for_tests();
        let store = repo
            .create_store(&valid_draft(), OWNERLESS_USER)
            .await
            .unwrap();

        assert_eq!(store.id, StoreId::new(4));
        assert_eq!(store.owner_id, OWNERLESS_USER);

        let stores = repo.list_stores().await;
        assert_eq!(stores.len(), 4);

        let owner = repo
            .list_users()
            .await
            .into_iter()
            .find(|u| u.id == OWNERLESS_USER)
            .unwrap();
        assert_eq!(owner.store_id, Some(store.id));
    }

    #[tokio::test]
    async fn test_create_store_invalid_fields_do_not_mutate() {
        let repo = Repository::for_tests();
        let draft = StoreDraft {
            name: "too short".to_string(),
            email: "bad".to_string(),
            address: String::new(),
        };

        let err = repo.create_store(&draft, OWNERLESS_USER).await.unwrap_err();
        let RepositoryError::Validation(errors) = err else {
            panic!("expected validation error, got {err:?}");
        };
        assert!(errors.get("name").is_some());
        assert!(errors.get("email").is_some());
        assert!(errors.get("address").is_some());

        assert_eq!(repo.list_stores().await.len(), 3);
    }

    #[tokio::test]
    async fn test_create_store_unknown_owner() {
        let repo = Repository::for_tests();
        let err = repo
            .create_store(&valid_draft(), UserId::new(999))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_create_store_rejects_second_store_per_owner() {
        let repo = Repository::for_tests();
        // Seed user 4 already owns store 1.
        let err = repo
            .create_store(&valid_draft(), UserId::new(4))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::Conflict(_)));
        assert_eq!(repo.list_stores().await.len(), 3);
    }

    #[tokio::test]
    async fn test_store_collection_survives_reopen() {
        let path = temp_store_file("reopen");
        let _ = std::fs::remove_file(&path);

        {
            let repo = Repository::open(Duration::ZERO, Some(path.clone()));
            repo.create_store(&valid_draft(), OWNERLESS_USER)
                .await
                .unwrap();
        }

        let reopened = Repository::open(Duration::ZERO, Some(path.clone()));
        let stores = reopened.list_stores().await;
        assert_eq!(stores.len(), 4);
        assert!(stores.iter().any(|s| s.owner_id == OWNERLESS_USER));

        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn test_corrupt_store_file_falls_back_to_seed() {
        let path = temp_store_file("corrupt");
        std::fs::write(&path, "not json").unwrap();

        let repo = Repository::open(Duration::ZERO, Some(path.clone()));
        assert_eq!(repo.list_stores().await.len(), 3);

        let _ = std::fs::remove_file(&path);
    }
}
