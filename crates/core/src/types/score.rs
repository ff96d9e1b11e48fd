//! Star-rating score type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a score is outside the 1-5 star range.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("score must be between {} and {} (got {got})", Score::MIN, Score::MAX)]
pub struct ScoreError {
    /// The rejected value.
    pub got: u8,
}

/// A star-rating score: an integer in `[1, 5]`.
///
/// The range is enforced at the type level, in both construction and
/// deserialization, so an out-of-range score can never reach the rating
/// store.
///
/// ```
/// use storeboard_core::Score;
///
/// assert!(Score::new(5).is_ok());
/// assert!(Score::new(0).is_err());
/// assert!(Score::new(6).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Score(u8);

impl Score {
    /// Lowest allowed score.
    pub const MIN: u8 = 1;
    /// Highest allowed score.
    pub const MAX: u8 = 5;

    /// Create a `Score`, rejecting values outside `[1, 5]`.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError`] if the value is out of range.
    pub const fn new(value: u8) -> Result<Self, ScoreError> {
        if value >= Self::MIN && value <= Self::MAX {
            Ok(Self(value))
        } else {
            Err(ScoreError { got: value })
        }
    }

    /// Get the underlying value.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for Score {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_full_range() {
        for value in 1..=5 {
            assert_eq!(Score::new(value).unwrap().as_u8(), value);
        }
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(Score::new(0), Err(ScoreError { got: 0 }));
        assert_eq!(Score::new(6), Err(ScoreError { got: 6 }));
        assert_eq!(Score::new(u8::MAX), Err(ScoreError { got: u8::MAX }));
    }

    #[test]
    fn test_serde_rejects_out_of_range() {
        let ok: Score = serde_json::from_str("3").unwrap();
        assert_eq!(ok.as_u8(), 3);

        assert!(serde_json::from_str::<Score>("0").is_err());
        assert!(serde_json::from_str::<Score>("6").is_err());
    }

    #[test]
    fn test_serde_serialize_transparent() {
        let score = Score::new(4).unwrap();
        assert_eq!(serde_json::to_string(&score).unwrap(), "4");
    }
}
