use tn_core::{Role, User};

use serde::Serialize;

/// User as returned by the API. The password hash never leaves the server.
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: String,
    pub email: String,
    pub role: Role,
    pub tenant_id: String,
    pub created_at: i64,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id.to_string(),
            email: u.email,
            role: u.role,
            tenant_id: u.tenant_id.to_string(),
            created_at: u.created_at.timestamp(),
        }
    }
}
