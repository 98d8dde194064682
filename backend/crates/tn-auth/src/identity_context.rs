use crate::SessionClaim;

use tn_core::{Plan, Role};

use uuid::Uuid;

/// Identity available to handlers after the gate has run.
///
/// Built once per request from a verified claim and the tenant's current
/// plan. `plan` is `None` when the tenant could not be resolved in time.
#[derive(Debug, Clone)]
pub struct IdentityContext {
    claim: SessionClaim,
    plan: Option<Plan>,
}

impl IdentityContext {
    pub fn from_claim(claim: SessionClaim, plan: Option<Plan>) -> Self {
        Self { claim, plan }
    }

    pub fn subject_id(&self) -> Uuid {
        self.claim.subject_id()
    }

    pub fn tenant_id(&self) -> Uuid {
        self.claim.tenant_id()
    }

    pub fn role(&self) -> Role {
        self.claim.role()
    }

    pub fn plan(&self) -> Option<Plan> {
        self.plan
    }

    pub fn claim(&self) -> &SessionClaim {
        &self.claim
    }
}
