use crate::repositories::row::{parse_enum, parse_timestamp, parse_uuid};
use crate::{DbError, Result as DbErrorResult};

use tn_core::User;

use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

#[derive(FromRow)]
struct UserRow {
    id: String,
    email: String,
    password_hash: String,
    role: String,
    tenant_id: String,
    created_at: i64,
}

impl TryFrom<UserRow> for User {
    type Error = DbError;

    fn try_from(row: UserRow) -> DbErrorResult<Self> {
        Ok(User {
            id: parse_uuid(&row.id, "users.id")?,
            email: row.email,
            password_hash: row.password_hash,
            role: parse_enum(&row.role, "users.role")?,
            tenant_id: parse_uuid(&row.tenant_id, "users.tenant_id")?,
            created_at: parse_timestamp(row.created_at, "users.created_at")?,
        })
    }
}

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a user. E-mail addresses are unique across all tenants; a
    /// duplicate yields `DbError::Conflict`.
    pub async fn create(&self, user: &User) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO users (id, email, password_hash, role, tenant_id, created_at)
                VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id.to_string())
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(user.tenant_id.to_string())
        .bind(user.created_at.timestamp())
        .execute(&self.pool)
        .await
        .map_err(|e| DbError::from_write(e, "a user with this e-mail already exists"))?;

        Ok(())
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, email, password_hash, role, tenant_id, created_at
                FROM users
                WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, email, password_hash, role, tenant_id, created_at
                FROM users
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }
}
