//! Domain types for the dashboard service.
//!
//! Wire shapes (serde names) are camelCase, the convention the dashboard
//! clients consume.

pub mod rating;
pub mod session;
pub mod store;
pub mod user;

pub use rating::{OwnerDashboard, Rating, RatingWithRater};
pub use session::{CurrentUser, session_keys};
pub use store::{DashboardCounts, Store, StoreDraft, StoreWithAggregate, ValidationErrors};
pub use user::User;
