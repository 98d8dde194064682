use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    /// Slug of an existing tenant to join
    #[serde(default, alias = "tenant_slug")]
    pub tenant_slug: Option<String>,
    /// "admin" (any case) joins as Admin; anything else as Member
    #[serde(default)]
    pub role: Option<String>,
}
