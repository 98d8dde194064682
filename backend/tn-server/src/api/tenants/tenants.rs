//! Tenant administration: invite and upgrade.
//!
//! Both run the role check before looking at the tenant, then the ownership
//! check, so a member learns nothing about which slugs exist.

use crate::api::blocking::hash_password;
use crate::api::fields::{required, required_email, required_secret};
use crate::{ApiError, ApiResult, AppState, InviteRequest, InviteResponse, UpgradeResponse};

use tn_auth::{Authenticated, IdentityContext, check_ownership, require_role};
use tn_core::{Plan, Role, Tenant, User};
use tn_db::{TenantRepository, UserRepository};

use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use log::info;

/// POST /api/tenants/{slug}/invite
pub async fn invite_user(
    State(state): State<AppState>,
    Authenticated(ctx): Authenticated,
    Path(slug): Path<String>,
    payload: Result<Json<InviteRequest>, JsonRejection>,
) -> ApiResult<Json<InviteResponse>> {
    let tenant = admin_tenant(&state, &ctx, &slug).await?;

    let Json(request) = payload?;
    let email = required_email(request.email)?;
    let role = Role::from_str(&required(request.role, "role")?)?;
    let password = required_secret(request.password, "password")?;

    let password_hash = hash_password(state.credentials.clone(), password).await?;
    let user = User::new(email, password_hash, role, tenant.id);
    UserRepository::new(state.pool.clone()).create(&user).await?;

    info!(
        "User {} invited {} to tenant {} as {}",
        ctx.subject_id(),
        user.id,
        tenant.slug,
        user.role
    );

    Ok(Json(InviteResponse {
        message: "User invited successfully".to_string(),
        user: user.into(),
    }))
}

/// POST /api/tenants/{slug}/upgrade
///
/// Upgrading a tenant that is already Pro succeeds without change.
pub async fn upgrade_tenant(
    State(state): State<AppState>,
    Authenticated(ctx): Authenticated,
    Path(slug): Path<String>,
) -> ApiResult<Json<UpgradeResponse>> {
    let mut tenant = admin_tenant(&state, &ctx, &slug).await?;

    let repo = TenantRepository::new(state.pool.clone());
    if !repo.update_plan(tenant.id, Plan::Pro).await? {
        return Err(ApiError::not_found("Resource not found"));
    }
    tenant.plan = Plan::Pro;

    info!("Tenant {} upgraded to pro by {}", tenant.slug, ctx.subject_id());

    Ok(Json(UpgradeResponse {
        message: "Tenant upgraded successfully".to_string(),
        tenant: tenant.into(),
    }))
}

/// Role Admin, then the slug must name the caller's own tenant.
async fn admin_tenant(state: &AppState, ctx: &IdentityContext, slug: &str) -> ApiResult<Tenant> {
    require_role(ctx, Role::Admin)?;
    if Tenant::validate_slug(slug).is_err() {
        return Err(ApiError::not_found("Resource not found"));
    }

    let tenant = TenantRepository::new(state.pool.clone())
        .find_by_slug(slug)
        .await?
        .ok_or_else(|| ApiError::not_found("Resource not found"))?;

    check_ownership(ctx, tenant.id)?;

    Ok(tenant)
}
