//! Tenant entity - the organization boundary for users and notes.

use crate::{CoreError, Plan, Result as CoreErrorResult};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const MAX_SLUG_LENGTH: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: Uuid,
    pub name: String,
    /// Unique URL-safe identifier (e.g., "acme")
    pub slug: String,
    pub plan: Plan,
    pub created_at: DateTime<Utc>,
}

impl Tenant {
    /// Create a new tenant on the free plan
    pub fn new(name: String, slug: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            slug,
            plan: Plan::Free,
            created_at: Utc::now(),
        }
    }

    /// Slugs are lowercase ASCII letters, digits and dashes.
    #[track_caller]
    pub fn validate_slug(slug: &str) -> CoreErrorResult<()> {
        let valid = !slug.is_empty()
            && slug.len() <= MAX_SLUG_LENGTH
            && slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

        if valid {
            Ok(())
        } else {
            Err(CoreError::Validation {
                message: format!("Invalid tenant slug '{}'", slug),
                field: Some("slug".to_string()),
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }
}
