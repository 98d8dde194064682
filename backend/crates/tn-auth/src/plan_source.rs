use crate::Result as AuthErrorResult;

use tn_core::Plan;

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Resolves a tenant's current plan.
///
/// Consulted on every authenticated request; a plan embedded in a token is
/// never trusted.
#[async_trait]
pub trait PlanSource: Send + Sync {
    /// `Ok(None)` when the tenant does not exist.
    async fn current_plan(&self, tenant_id: Uuid) -> AuthErrorResult<Option<Plan>>;
}

/// In-memory plan table, used where no database is wired in.
#[derive(Debug, Default)]
pub struct InMemoryPlanSource {
    plans: RwLock<HashMap<Uuid, Plan>>,
}

impl InMemoryPlanSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_plan(&self, tenant_id: Uuid, plan: Plan) {
        self.plans.write().await.insert(tenant_id, plan);
    }

    pub async fn remove(&self, tenant_id: Uuid) {
        self.plans.write().await.remove(&tenant_id);
    }
}

#[async_trait]
impl PlanSource for InMemoryPlanSource {
    async fn current_plan(&self, tenant_id: Uuid) -> AuthErrorResult<Option<Plan>> {
        Ok(self.plans.read().await.get(&tenant_id).copied())
    }
}
