use serde::Deserialize;

/// Fields are optional so a missing one is reported as a 400 naming it.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}
