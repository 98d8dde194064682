use tn_auth::IdentityContext;
use tn_core::{Plan, Role};

use serde::Serialize;

/// GET /api/auth/session
#[derive(Debug, Serialize)]
pub struct SessionInfoResponse {
    pub user_id: String,
    pub tenant_id: String,
    pub role: Role,
    /// None when the tenant could not be resolved for this request
    pub plan: Option<Plan>,
    pub issued_at: i64,
    pub expires_at: i64,
}

impl From<&IdentityContext> for SessionInfoResponse {
    fn from(ctx: &IdentityContext) -> Self {
        Self {
            user_id: ctx.subject_id().to_string(),
            tenant_id: ctx.tenant_id().to_string(),
            role: ctx.role(),
            plan: ctx.plan(),
            issued_at: ctx.claim().issued_at().timestamp(),
            expires_at: ctx.claim().expires_at().timestamp(),
        }
    }
}
