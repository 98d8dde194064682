use crate::Role;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user belongs to exactly one tenant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    /// Argon2 PHC string; never serialized into API responses
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Role,
    pub tenant_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(email: String, password_hash: String, role: Role, tenant_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            role,
            tenant_id,
            created_at: Utc::now(),
        }
    }
}
