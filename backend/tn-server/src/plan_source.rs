use tn_auth::{AuthError, PlanSource, Result as AuthErrorResult};
use tn_core::{ErrorLocation, Plan};
use tn_db::TenantRepository;

use std::panic::Location;

use async_trait::async_trait;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Resolves a tenant's current plan from the tenants table on every request.
pub struct DbPlanSource {
    pool: SqlitePool,
}

impl DbPlanSource {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlanSource for DbPlanSource {
    async fn current_plan(&self, tenant_id: Uuid) -> AuthErrorResult<Option<Plan>> {
        let repo = TenantRepository::new(self.pool.clone());
        let tenant = repo
            .find_by_id(tenant_id)
            .await
            .map_err(|e| AuthError::Storage {
                tenant_id,
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(tenant.map(|t| t.plan))
    }
}
