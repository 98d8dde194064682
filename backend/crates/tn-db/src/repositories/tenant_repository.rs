use crate::repositories::row::{parse_enum, parse_timestamp, parse_uuid};
use crate::{DbError, Result as DbErrorResult};

use tn_core::{Plan, Tenant};

use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

#[derive(FromRow)]
struct TenantRow {
    id: String,
    name: String,
    slug: String,
    plan: String,
    created_at: i64,
}

impl TryFrom<TenantRow> for Tenant {
    type Error = DbError;

    fn try_from(row: TenantRow) -> DbErrorResult<Self> {
        Ok(Tenant {
            id: parse_uuid(&row.id, "tenants.id")?,
            name: row.name,
            slug: row.slug,
            plan: parse_enum(&row.plan, "tenants.plan")?,
            created_at: parse_timestamp(row.created_at, "tenants.created_at")?,
        })
    }
}

pub struct TenantRepository {
    pool: SqlitePool,
}

impl TenantRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a tenant. A taken slug yields `DbError::Conflict`.
    pub async fn create(&self, tenant: &Tenant) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO tenants (id, name, slug, plan, created_at)
                VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(tenant.id.to_string())
        .bind(&tenant.name)
        .bind(&tenant.slug)
        .bind(tenant.plan.as_str())
        .bind(tenant.created_at.timestamp())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DbError::from_write(e, &format!("tenant slug '{}' already exists", tenant.slug))
        })?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Tenant>> {
        let row = sqlx::query_as::<_, TenantRow>(
            r#"
                SELECT id, name, slug, plan, created_at
                FROM tenants
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Tenant::try_from).transpose()
    }

    pub async fn find_by_slug(&self, slug: &str) -> DbErrorResult<Option<Tenant>> {
        let row = sqlx::query_as::<_, TenantRow>(
            r#"
                SELECT id, name, slug, plan, created_at
                FROM tenants
                WHERE slug = ?
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Tenant::try_from).transpose()
    }

    /// Returns false when no tenant has this id.
    pub async fn update_plan(&self, id: Uuid, plan: Plan) -> DbErrorResult<bool> {
        let result = sqlx::query("UPDATE tenants SET plan = ? WHERE id = ?")
            .bind(plan.as_str())
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
