use tn_core::Note;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct NoteDto {
    pub id: String,
    pub tenant_id: String,
    /// Author
    pub user_id: String,
    pub title: String,
    pub content: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Note> for NoteDto {
    fn from(n: Note) -> Self {
        Self {
            id: n.id.to_string(),
            tenant_id: n.tenant_id.to_string(),
            user_id: n.user_id.to_string(),
            title: n.title,
            content: n.content,
            created_at: n.created_at.timestamp(),
            updated_at: n.updated_at.timestamp(),
        }
    }
}
