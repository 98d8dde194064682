use serde::Deserialize;

/// Omitted fields keep their current value.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateNoteRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}
