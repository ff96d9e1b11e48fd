//! User repository operations.

use crate::db::Repository;
use crate::models::User;

impl Repository {
    /// Look up a user by email address.
    ///
    /// This is the whole credential model of the dashboard: selecting an
    /// existing user by email, no password. Returns `None` for an unknown
    /// email.
    pub async fn authenticate(&self, email: &str) -> Option<User> {
        self.simulate_latency().await;
        let state = self.state().read().await;
        state.users.iter().find(|u| u.email.as_str() == email).cloned()
    }

    /// All users, in insertion order.
    pub async fn list_users(&self) -> Vec<User> {
        self.simulate_latency().await;
        let state = self.state().read().await;
        state.users.clone()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use storeboard_core::{Role, UserId};

    use super::*;

    #[tokio::test]
    async fn test_authenticate_known_email() {
        let repo = Repository::for_tests();
        let user = repo.authenticate("john.doe@example.com").await.unwrap();
        assert_eq!(user.id, UserId::new(2));
        assert_eq!(user.role, Role::RegularUser);
    }

    #[tokio::test]
    async fn test_authenticate_unknown_email() {
        let repo = Repository::for_tests();
        assert!(repo.authenticate("nobody@example.com").await.is_none());
    }

    #[tokio::test]
    async fn test_authenticate_is_exact_match() {
        let repo = Repository::for_tests();
        assert!(repo.authenticate("John.Doe@example.com").await.is_none());
        assert!(repo.authenticate("").await.is_none());
    }

    #[tokio::test]
    async fn test_list_users_returns_snapshot() {
        let repo = Repository::for_tests();
        let mut users = repo.list_users().await;
        assert_eq!(users.len(), 6);

        // Mutating the returned snapshot must not affect the store.
        users.clear();
        assert_eq!(repo.list_users().await.len(), 6);
    }
}
