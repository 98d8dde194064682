use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct CreateNoteRequest {
    /// Required, non-blank
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}
