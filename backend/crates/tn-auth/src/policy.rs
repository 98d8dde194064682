//! Policy checks layered on top of an `IdentityContext`.
//!
//! Each check is a pure predicate. Handlers run them after the gate, in the
//! order role, ownership, quota; the first failure ends the request.

use crate::{AuthError, IdentityContext, Result as AuthErrorResult};

use tn_core::{Plan, Role};

use std::panic::Location;

use error_location::ErrorLocation;
use uuid::Uuid;

/// Default number of notes a free tenant may hold
pub const DEFAULT_FREE_NOTE_LIMIT: u64 = 3;

/// Note quota applied to free tenants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteQuota {
    pub free_limit: u64,
}

impl Default for NoteQuota {
    fn default() -> Self {
        Self {
            free_limit: DEFAULT_FREE_NOTE_LIMIT,
        }
    }
}

/// Exact role match; fails closed.
#[track_caller]
pub fn require_role(ctx: &IdentityContext, required: Role) -> AuthErrorResult<()> {
    if ctx.role() == required {
        Ok(())
    } else {
        Err(AuthError::role_required(required))
    }
}

/// The resource must belong to the caller's tenant.
///
/// A mismatch is reported as `NotFound` so callers cannot probe other tenants.
#[track_caller]
pub fn check_ownership(ctx: &IdentityContext, resource_tenant_id: Uuid) -> AuthErrorResult<()> {
    if ctx.tenant_id() == resource_tenant_id {
        Ok(())
    } else {
        Err(AuthError::NotFound {
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

/// Reject creation once a free tenant holds `quota.free_limit` notes.
///
/// An unresolved plan is treated as free.
#[track_caller]
pub fn check_quota(
    ctx: &IdentityContext,
    current_count: u64,
    quota: &NoteQuota,
) -> AuthErrorResult<()> {
    match note_limit(ctx, quota) {
        Some(limit) if current_count >= limit => Err(AuthError::quota_exceeded(limit)),
        _ => Ok(()),
    }
}

/// Note limit for the caller's tenant; `None` when the plan is exempt.
///
/// Handed to the conditional insert so the limit also holds under
/// concurrent creates.
pub fn note_limit(ctx: &IdentityContext, quota: &NoteQuota) -> Option<u64> {
    let plan = ctx.plan().unwrap_or(Plan::Free);
    if plan.is_quota_exempt() {
        None
    } else {
        Some(quota.free_limit)
    }
}

/// Only the author of a resource or an admin of its tenant may modify it.
#[track_caller]
pub fn check_authorship(ctx: &IdentityContext, author_id: Uuid) -> AuthErrorResult<()> {
    if ctx.role().is_admin() || ctx.subject_id() == author_id {
        Ok(())
    } else {
        Err(AuthError::Forbidden {
            message: "only the author or an admin may modify this note".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
