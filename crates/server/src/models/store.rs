//! Store domain types and creation validation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use storeboard_core::{Email, Score, StoreId, UserId};

/// A registered store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    /// Unique store ID.
    pub id: StoreId,
    /// Store name.
    pub name: String,
    /// Contact email address.
    pub email: Email,
    /// Store address.
    pub address: String,
    /// The user who owns this store. Fixed at creation.
    pub owner_id: UserId,
}

/// A store joined with its computed rating aggregate.
///
/// Derived on every read - nothing here is stored.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreWithAggregate {
    #[serde(flatten)]
    pub store: Store,
    /// Mean of all ratings for this store, 0.0 when none, one decimal place.
    pub avg_rating: f64,
    /// The requesting user's own score, if they have rated this store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_rating: Option<Score>,
}

/// Platform-wide entity counts for the admin overview.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardCounts {
    pub user_count: usize,
    pub store_count: usize,
    pub rating_count: usize,
}

/// Field-level validation messages, keyed by field name.
///
/// `BTreeMap` keeps the serialized order deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    /// Create an empty error set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an error set with a single field message.
    #[must_use]
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.insert(field, message);
        errors
    }

    /// Record a message for a field.
    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0.insert(field.to_string(), message.into());
    }

    /// Whether any field failed validation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up the message for a field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }
}

/// Store name length bounds, inclusive.
const NAME_MIN_CHARS: usize = 20;
const NAME_MAX_CHARS: usize = 60;

/// Maximum address length, inclusive.
const ADDRESS_MAX_CHARS: usize = 400;

/// Unvalidated input for creating a store.
///
/// The owner comes from the session, not the request body, so ownership can
/// never be asserted by the client.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreDraft {
    pub name: String,
    pub email: String,
    pub address: String,
}

impl StoreDraft {
    /// Validate the draft, producing the parsed contact email on success.
    ///
    /// This is the authoritative validation point - the same rules the UI
    /// applies client-side, enforced server-side.
    ///
    /// # Errors
    ///
    /// Returns one message per invalid field:
    /// - name length outside `[20, 60]` characters
    /// - email not of a basic `local@domain.tld` shape
    /// - address empty or longer than 400 characters
    pub fn validate(&self) -> Result<Email, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name_chars = self.name.chars().count();
        if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&name_chars) {
            errors.insert(
                "name",
                format!("Store name must be between {NAME_MIN_CHARS} and {NAME_MAX_CHARS} characters."),
            );
        }

        let email = match Email::parse(&self.email) {
            Ok(email) => Some(email),
            Err(_) => {
                errors.insert("email", "Please enter a valid email address.");
                None
            }
        };

        let address_chars = self.address.chars().count();
        if address_chars == 0 {
            errors.insert("address", "Address is required.");
        } else if address_chars > ADDRESS_MAX_CHARS {
            errors.insert(
                "address",
                format!("Address must be {ADDRESS_MAX_CHARS} characters or less."),
            );
        }

        match email {
            Some(email) if errors.is_empty() => Ok(email),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn draft(name: &str, email: &str, address: &str) -> StoreDraft {
        StoreDraft {
            name: name.to_string(),
            email: email.to_string(),
            address: address.to_string(),
        }
    }

    fn valid_name() -> String {
        "A Perfectly Valid Store Name".to_string()
    }

    #[test]
    fn test_valid_draft_passes() {
        let draft = draft(&valid_name(), "shop@example.com", "1 Main St");
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_name_boundaries_inclusive() {
        // 20 and 60 succeed; 19 and 61 fail.
        for len in [20, 60] {
            let draft = draft(&"n".repeat(len), "shop@example.com", "1 Main St");
            assert!(draft.validate().is_ok(), "length {len} should pass");
        }
        for len in [19, 61] {
            let draft = draft(&"n".repeat(len), "shop@example.com", "1 Main St");
            let errors = draft.validate().unwrap_err();
            assert!(errors.get("name").is_some(), "length {len} should fail");
        }
    }

    #[test]
    fn test_name_length_counts_chars_not_bytes() {
        // 20 multibyte characters should be accepted.
        let draft = draft(&"é".repeat(20), "shop@example.com", "1 Main St");
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_invalid_email_reports_email_field() {
        let errors = draft(&valid_name(), "not-an-email", "1 Main St")
            .validate()
            .unwrap_err();
        assert_eq!(errors.get("email"), Some("Please enter a valid email address."));
    }

    #[test]
    fn test_address_boundaries() {
        let at_limit = draft(&valid_name(), "shop@example.com", &"a".repeat(400));
        assert!(at_limit.validate().is_ok());

        let over_limit = draft(&valid_name(), "shop@example.com", &"a".repeat(401));
        assert!(over_limit.validate().unwrap_err().get("address").is_some());

        let empty = draft(&valid_name(), "shop@example.com", "");
        assert_eq!(
            empty.validate().unwrap_err().get("address"),
            Some("Address is required.")
        );
    }

    #[test]
    fn test_all_invalid_fields_reported_together() {
        let errors = draft("short", "bad", "").validate().unwrap_err();
        assert!(errors.get("name").is_some());
        assert!(errors.get("email").is_some());
        assert!(errors.get("address").is_some());
    }

    #[test]
    fn test_validation_errors_serialize_as_map() {
        let errors = ValidationErrors::single("name", "too short");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, serde_json::json!({"name": "too short"}));
    }
}
