//! Rating repository operations: aggregation and the per-user upsert.

use chrono::Utc;

use storeboard_core::{Score, StoreId, UserId};

use crate::db::{Repository, RepositoryError};
use crate::models::{OwnerDashboard, Rating, RatingWithRater, StoreWithAggregate};

/// Placeholder rater name when a rating's user no longer resolves. Users are
/// never deleted, so this should not be observable.
const UNKNOWN_RATER: &str = "Unknown User";

/// Mean of the given scores, 0.0 when empty, rounded to one decimal place
/// (round half away from zero).
fn rounded_mean(scores: &[Score]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    let sum: u32 = scores.iter().map(|s| u32::from(s.as_u8())).sum();
    #[allow(clippy::cast_precision_loss)] // At most a handful of ratings per store
    let mean = f64::from(sum) / scores.len() as f64;
    (mean * 10.0).round() / 10.0
}

impl Repository {
    /// All stores joined with their average rating and `user_id`'s own
    /// score where one exists. Aggregates are recomputed on every call by a
    /// full scan of the rating set.
    pub async fn list_stores_with_aggregates(&self, user_id: UserId) -> Vec<StoreWithAggregate> {
        self.simulate_latency().await;
        let state = self.state().read().await;

        state
            .stores
            .iter()
            .map(|store| {
                let scores: Vec<Score> = state
                    .ratings
                    .iter()
                    .filter(|r| r.store_id == store.id)
                    .map(|r| r.score)
                    .collect();
                let user_rating = state
                    .ratings
                    .iter()
                    .find(|r| r.store_id == store.id && r.user_id == user_id)
                    .map(|r| r.score);

                StoreWithAggregate {
                    store: store.clone(),
                    avg_rating: rounded_mean(&scores),
                    user_rating,
                }
            })
            .collect()
    }

    /// The owner view: their store, its average rating, and its ratings
    /// newest-first joined with each rater's display name.
    ///
    /// Returns `None` when the owner has no store - an absent result, not an
    /// error.
    pub async fn owner_dashboard(&self, owner_id: UserId) -> Option<OwnerDashboard> {
        self.simulate_latency().await;
        let state = self.state().read().await;

        let store = state.stores.iter().find(|s| s.owner_id == owner_id)?.clone();

        let store_ratings: Vec<&Rating> = state
            .ratings
            .iter()
            .filter(|r| r.store_id == store.id)
            .collect();
        let scores: Vec<Score> = store_ratings.iter().map(|r| r.score).collect();

        let mut ratings: Vec<RatingWithRater> = store_ratings
            .into_iter()
            .map(|rating| {
                let user_name = state
                    .users
                    .iter()
                    .find(|u| u.id == rating.user_id)
                    .map_or_else(|| UNKNOWN_RATER.to_string(), |u| u.name.clone());
                RatingWithRater {
                    rating: rating.clone(),
                    user_name,
                }
            })
            .collect();
        // Stable sort: ties on timestamp keep insertion order.
        ratings.sort_by(|a, b| b.rating.created_at.cmp(&a.rating.created_at));

        Some(OwnerDashboard {
            store,
            avg_rating: rounded_mean(&scores),
            ratings,
        })
    }

    /// Insert or update `user_id`'s rating of `store_id`.
    ///
    /// If a rating for the pair exists its score is overwritten and its
    /// timestamp set to now, preserving the record's identity; otherwise a
    /// new record is created. Aggregates are not recomputed eagerly -
    /// callers re-fetch after a successful upsert.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if the store does not exist.
    pub async fn submit_rating(
        &self,
        user_id: UserId,
        store_id: StoreId,
        score: Score,
    ) -> Result<Rating, RepositoryError> {
        self.simulate_latency().await;
        let mut state = self.state().write().await;

        if !state.stores.iter().any(|s| s.id == store_id) {
            return Err(RepositoryError::NotFound("store"));
        }

        let now = Utc::now();
        if let Some(existing) = state
            .ratings
            .iter_mut()
            .find(|r| r.user_id == user_id && r.store_id == store_id)
        {
            existing.score = score;
            existing.created_at = now;
            return Ok(existing.clone());
        }

        let rating = Rating {
            id: state.allocate_rating_id(),
            user_id,
            store_id,
            score,
            created_at: now,
        };
        state.ratings.push(rating.clone());
        Ok(rating)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use storeboard_core::RatingId;

    use super::*;

    fn score(n: u8) -> Score {
        Score::new(n).unwrap()
    }

    /// Seed regular users.
    const JOHN: UserId = UserId::new(2);
    const JANE: UserId = UserId::new(3);
    /// Seed store owner without a store.
    const CAROL: UserId = UserId::new(6);

    const STORE_1: StoreId = StoreId::new(1);
    const STORE_2: StoreId = StoreId::new(2);

    #[test]
    fn test_rounded_mean_empty_is_zero() {
        assert!((rounded_mean(&[]) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rounded_mean_one_decimal() {
        // 13/3 = 4.333... -> 4.3
        let scores = [score(5), score(4), score(4)];
        assert!((rounded_mean(&scores) - 4.3).abs() < f64::EPSILON);

        // 14/3 = 4.666... -> 4.7
        let scores = [score(5), score(5), score(4)];
        assert!((rounded_mean(&scores) - 4.7).abs() < f64::EPSILON);

        // Exact halves round away from zero: 4.5 stays 4.5 (already one
        // decimal), 3/2 = 1.5.
        let scores = [score(1), score(2)];
        assert!((rounded_mean(&scores) - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rounded_mean_bounds() {
        // Any non-empty score set averages within [1.0, 5.0].
        let all_min = [score(1); 7];
        let all_max = [score(5); 7];
        assert!((rounded_mean(&all_min) - 1.0).abs() < f64::EPSILON);
        assert!((rounded_mean(&all_max) - 5.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_seed_aggregates() {
        let repo = Repository::for_tests();
        let stores = repo.list_stores_with_aggregates(JOHN).await;

        // Store 1: {5, 4} -> 4.5; John rated it 5.
        let s1 = stores.iter().find(|s| s.store.id == STORE_1).unwrap();
        assert!((s1.avg_rating - 4.5).abs() < f64::EPSILON);
        assert_eq!(s1.user_rating, Some(score(5)));

        // Store 2: {3} -> 3.0; John rated it 3.
        let s2 = stores.iter().find(|s| s.store.id == STORE_2).unwrap();
        assert!((s2.avg_rating - 3.0).abs() < f64::EPSILON);
        assert_eq!(s2.user_rating, Some(score(3)));

        // Store 3: Jane rated it, John did not.
        let s3 = stores.iter().find(|s| s.store.id == StoreId::new(3)).unwrap();
        assert_eq!(s3.user_rating, None);
    }

    #[tokio::test]
    async fn test_store_with_no_ratings_averages_zero() {
        let repo = Repository::for_tests();
        let store = repo
            .create_store(
                &crate::models::StoreDraft {
                    name: "Jane's Wonderful Widget Shop".to_string(),
                    email: "widgets@example.com".to_string(),
                    address: "12 Widget Way, Town".to_string(),
                },
                CAROL,
            )
            .await
            .unwrap();

        let stores = repo.list_stores_with_aggregates(JOHN).await;
        let created = stores.iter().find(|s| s.store.id == store.id).unwrap();
        assert!((created.avg_rating - 0.0).abs() < f64::EPSILON);
        assert_eq!(created.user_rating, None);
    }

    #[tokio::test]
    async fn test_upsert_updates_in_place() {
        // Seed scenario: store 1 has {5, 4} -> 4.5. John resubmits 3:
        // {3, 4} -> 3.5, same record count, same record id.
        let repo = Repository::for_tests();

        let updated = repo.submit_rating(JOHN, STORE_1, score(3)).await.unwrap();
        assert_eq!(updated.id, RatingId::new(1));
        assert_eq!(updated.score, score(3));

        let stores = repo.list_stores_with_aggregates(JOHN).await;
        let s1 = stores.iter().find(|s| s.store.id == STORE_1).unwrap();
        assert!((s1.avg_rating - 3.5).abs() < f64::EPSILON);

        let counts = repo.dashboard_counts().await;
        assert_eq!(counts.rating_count, 4);
    }

    #[tokio::test]
    async fn test_upsert_is_idempotent() {
        let repo = Repository::for_tests();

        let first = repo.submit_rating(JOHN, STORE_1, score(2)).await.unwrap();
        let second = repo.submit_rating(JOHN, STORE_1, score(2)).await.unwrap();

        assert_eq!(first.id, second.id);
        assert!(second.created_at >= first.created_at);
        assert_eq!(repo.dashboard_counts().await.rating_count, 4);
    }

    #[tokio::test]
    async fn test_repeated_submissions_never_grow_pair_count() {
        let repo = Repository::for_tests();
        for n in [1, 5, 2, 4, 3] {
            repo.submit_rating(JANE, STORE_2, score(n)).await.unwrap();
        }

        // Jane had no rating for store 2, so exactly one was created.
        assert_eq!(repo.dashboard_counts().await.rating_count, 5);

        let stores = repo.list_stores_with_aggregates(JANE).await;
        let s2 = stores.iter().find(|s| s.store.id == STORE_2).unwrap();
        assert_eq!(s2.user_rating, Some(score(3)));
    }

    #[tokio::test]
    async fn test_first_rating_gets_fresh_id() {
        let repo = Repository::for_tests();
        let rating = repo.submit_rating(JANE, STORE_2, score(4)).await.unwrap();
        assert_eq!(rating.id, RatingId::new(5));
        assert_eq!(repo.dashboard_counts().await.rating_count, 5);
    }

    #[tokio::test]
    async fn test_submit_rating_unknown_store() {
        let repo = Repository::for_tests();
        let err = repo
            .submit_rating(JOHN, StoreId::new(999), score(4))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_owner_dashboard_joins_and_sorts_newest_first() {
        let repo = Repository::for_tests();

        // Alice (user 4) owns store 1 with ratings from John and Jane;
        // Jane's is newer.
        let dashboard = repo.owner_dashboard(UserId::new(4)).await.unwrap();
        assert_eq!(dashboard.store.id, STORE_1);
        assert!((dashboard.avg_rating - 4.5).abs() < f64::EPSILON);

        let names: Vec<&str> = dashboard
            .ratings
            .iter()
            .map(|r| r.user_name.as_str())
            .collect();
        assert_eq!(names, vec!["Jane Smith", "John Doe"]);
    }

    #[tokio::test]
    async fn test_owner_dashboard_reflects_new_rating_first() {
        let repo = Repository::for_tests();
        repo.submit_rating(JANE, STORE_1, score(2)).await.unwrap();

        let dashboard = repo.owner_dashboard(UserId::new(4)).await.unwrap();
        let first = dashboard.ratings.first().unwrap();
        assert_eq!(first.user_name, "Jane Smith");
        assert_eq!(first.rating.score, score(2));
    }

    #[tokio::test]
    async fn test_owner_dashboard_absent_without_store() {
        let repo = Repository::for_tests();
        // Carol is a store owner who has not created her store yet.
        assert!(repo.owner_dashboard(CAROL).await.is_none());
    }
}
