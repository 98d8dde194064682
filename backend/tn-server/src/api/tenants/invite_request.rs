use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct InviteRequest {
    #[serde(default)]
    pub email: Option<String>,
    /// "admin" or "member"
    #[serde(default)]
    pub role: Option<String>,
    /// Initial password for the invited user
    #[serde(default)]
    pub password: Option<String>,
}
