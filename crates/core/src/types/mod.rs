//! Type-safe wrappers for Storeboard domain primitives.

pub mod email;
pub mod id;
pub mod role;
pub mod score;

pub use email::{Email, EmailError};
pub use id::{RatingId, StoreId, UserId};
pub use role::Role;
pub use score::{Score, ScoreError};
