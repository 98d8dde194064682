use crate::UserDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct InviteResponse {
    pub message: String,
    pub user: UserDto,
}
