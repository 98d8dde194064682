use crate::{AuthError, IdentityContext, PlanSource, Result as AuthErrorResult, TokenCodec};

use std::panic::Location;
use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderMap, header::AUTHORIZATION};
use error_location::ErrorLocation;
use log::{debug, warn};

/// Default bound on the per-request plan lookup
pub const DEFAULT_PLAN_LOOKUP_TIMEOUT: Duration = Duration::from_secs(2);

/// Single choke point in front of every protected route.
///
/// Handlers receive its output through the `Authenticated` extractor, so a
/// rejected request never reaches the handler body.
pub struct AuthorizationGate {
    codec: Arc<TokenCodec>,
    plans: Arc<dyn PlanSource>,
    lookup_timeout: Duration,
}

impl AuthorizationGate {
    pub fn new(
        codec: Arc<TokenCodec>,
        plans: Arc<dyn PlanSource>,
        lookup_timeout: Duration,
    ) -> Self {
        Self {
            codec,
            plans,
            lookup_timeout,
        }
    }

    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    /// Extract, verify and enrich the caller's identity.
    ///
    /// Tenant-not-found and lookup timeouts produce a context without a plan;
    /// storage failures are returned as errors (500), never as 401.
    pub async fn authenticate(&self, headers: &HeaderMap) -> AuthErrorResult<IdentityContext> {
        let token = extract_bearer(headers)?;

        let claim = self.codec.decode(token).inspect_err(|_| {
            warn!("Rejected request with invalid session token");
        })?;

        let tenant_id = claim.tenant_id();
        let plan = match tokio::time::timeout(self.lookup_timeout, self.plans.current_plan(tenant_id))
            .await
        {
            Ok(Ok(Some(plan))) => Some(plan),
            Ok(Ok(None)) => {
                warn!("Tenant {} from a valid token no longer exists", tenant_id);
                None
            }
            Ok(Err(e)) => return Err(e),
            Err(_) => {
                warn!(
                    "Plan lookup for tenant {} exceeded {:?}",
                    tenant_id, self.lookup_timeout
                );
                None
            }
        };

        debug!(
            "Authenticated user {} (tenant {}, role {})",
            claim.subject_id(),
            tenant_id,
            claim.role()
        );

        Ok(IdentityContext::from_claim(claim, plan))
    }
}

/// Pull the token out of an `Authorization: Bearer <token>` header.
#[track_caller]
pub fn extract_bearer(headers: &HeaderMap) -> AuthErrorResult<&str> {
    let caller = Location::caller();
    let missing = || AuthError::MissingCredential {
        location: ErrorLocation::from(caller),
    };

    let auth_header = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            debug!("Missing Authorization header");
            missing()
        })?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .ok_or_else(|| {
            debug!("Invalid authorization scheme: expected 'Bearer'");
            missing()
        })?;

    if token.is_empty() {
        return Err(missing());
    }

    Ok(token)
}
