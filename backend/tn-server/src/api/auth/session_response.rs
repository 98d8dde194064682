use crate::UserDto;

use serde::Serialize;

/// Login and signup response
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub token: String,
    pub user: UserDto,
}
