//! Note persistence.
//!
//! Lookups by id are not tenant-scoped; callers run the ownership check on
//! the returned note before exposing it.

use crate::repositories::row::{parse_timestamp, parse_uuid};
use crate::{DbError, Result as DbErrorResult};

use tn_core::Note;

use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

#[derive(FromRow)]
struct NoteRow {
    id: String,
    tenant_id: String,
    user_id: String,
    title: String,
    content: String,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<NoteRow> for Note {
    type Error = DbError;

    fn try_from(row: NoteRow) -> DbErrorResult<Self> {
        Ok(Note {
            id: parse_uuid(&row.id, "notes.id")?,
            tenant_id: parse_uuid(&row.tenant_id, "notes.tenant_id")?,
            user_id: parse_uuid(&row.user_id, "notes.user_id")?,
            title: row.title,
            content: row.content,
            created_at: parse_timestamp(row.created_at, "notes.created_at")?,
            updated_at: parse_timestamp(row.updated_at, "notes.updated_at")?,
        })
    }
}

pub struct NoteRepository {
    pool: SqlitePool,
}

impl NoteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, note: &Note) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO notes (id, tenant_id, user_id, title, content, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(note.id.to_string())
        .bind(note.tenant_id.to_string())
        .bind(note.user_id.to_string())
        .bind(&note.title)
        .bind(&note.content)
        .bind(note.created_at.timestamp())
        .bind(note.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Insert only while the tenant holds fewer than `limit` notes.
    ///
    /// The count and the insert are one statement, so concurrent creates
    /// cannot overshoot the limit. `None` means unlimited. Returns false when
    /// the limit was already reached.
    pub async fn create_within_limit(&self, note: &Note, limit: Option<u64>) -> DbErrorResult<bool> {
        let Some(limit) = limit else {
            self.create(note).await?;
            return Ok(true);
        };

        let result = sqlx::query(
            r#"
                INSERT INTO notes (id, tenant_id, user_id, title, content, created_at, updated_at)
                SELECT ?, ?, ?, ?, ?, ?, ?
                WHERE (SELECT COUNT(*) FROM notes WHERE tenant_id = ?) < ?
            "#,
        )
        .bind(note.id.to_string())
        .bind(note.tenant_id.to_string())
        .bind(note.user_id.to_string())
        .bind(&note.title)
        .bind(&note.content)
        .bind(note.created_at.timestamp())
        .bind(note.updated_at.timestamp())
        .bind(note.tenant_id.to_string())
        .bind(i64::try_from(limit).unwrap_or(i64::MAX))
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Note>> {
        let row = sqlx::query_as::<_, NoteRow>(
            r#"
                SELECT id, tenant_id, user_id, title, content, created_at, updated_at
                FROM notes
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Note::try_from).transpose()
    }

    /// Newest first
    pub async fn list_for_tenant(&self, tenant_id: Uuid) -> DbErrorResult<Vec<Note>> {
        let rows = sqlx::query_as::<_, NoteRow>(
            r#"
                SELECT id, tenant_id, user_id, title, content, created_at, updated_at
                FROM notes
                WHERE tenant_id = ?
                ORDER BY created_at DESC, rowid DESC
            "#,
        )
        .bind(tenant_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Note::try_from).collect()
    }

    pub async fn count_for_tenant(&self, tenant_id: Uuid) -> DbErrorResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM notes WHERE tenant_id = ?")
            .bind(tenant_id.to_string())
            .fetch_one(&self.pool)
            .await?;

        Ok(count.max(0) as u64)
    }

    /// Persist title, content and updated_at. Returns false when the note is gone.
    pub async fn update(&self, note: &Note) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
                UPDATE notes
                SET title = ?, content = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&note.title)
        .bind(&note.content)
        .bind(note.updated_at.timestamp())
        .bind(note.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Returns false when the note did not exist.
    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM notes WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
