//! Note entity - owned by one tenant and authored by one user.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MAX_TITLE_LENGTH: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub tenant_id: Uuid,
    /// Author of the note
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    pub fn new(tenant_id: Uuid, user_id: Uuid, title: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            tenant_id,
            user_id,
            title,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    #[track_caller]
    pub fn validate_title(title: &str) -> CoreErrorResult<()> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(CoreError::Validation {
                message: "Title cannot be empty".to_string(),
                field: Some("title".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if trimmed.chars().count() > MAX_TITLE_LENGTH {
            return Err(CoreError::Validation {
                message: format!("Title exceeds {} characters", MAX_TITLE_LENGTH),
                field: Some("title".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }
}
