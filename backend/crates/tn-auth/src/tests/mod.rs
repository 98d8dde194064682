mod extractor;

use crate::{
    AuthorizationGate, IdentityContext, InMemoryPlanSource, PlanSource, SessionClaim,
    SessionSubject, TokenCodec, TokenSettings,
};

use tn_core::{Plan, Role};

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use uuid::Uuid;

pub(crate) const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

pub(crate) fn test_codec() -> TokenCodec {
    TokenCodec::new(&TokenSettings::with_secret(TEST_SECRET)).unwrap()
}

pub(crate) fn subject(role: Role) -> SessionSubject {
    SessionSubject {
        subject_id: Uuid::new_v4(),
        tenant_id: Uuid::new_v4(),
        role,
    }
}

/// Identity context without going through a token
pub(crate) fn identity(role: Role, plan: Option<Plan>) -> IdentityContext {
    let now = Utc::now();
    let claim = SessionClaim::new(subject(role), now, now + chrono::TimeDelta::hours(1));
    IdentityContext::from_claim(claim, plan)
}

pub(crate) fn gate_with(plans: Arc<dyn PlanSource>) -> AuthorizationGate {
    AuthorizationGate::new(Arc::new(test_codec()), plans, Duration::from_millis(200))
}

pub(crate) fn in_memory_plans() -> Arc<InMemoryPlanSource> {
    Arc::new(InMemoryPlanSource::new())
}
