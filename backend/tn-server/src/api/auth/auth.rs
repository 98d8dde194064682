//! Session handlers: login, signup and session introspection.

use crate::api::blocking::{hash_password, verify_password};
use crate::api::fields::{required, required_email, required_secret};
use crate::{
    ApiError, ApiResult, AppState, LoginRequest, SessionInfoResponse, SessionResponse,
    SignupRequest,
};

use tn_auth::{Authenticated, SessionSubject};
use tn_core::{Role, User};
use tn_db::{TenantRepository, UserRepository};

use std::panic::Location;
use std::str::FromStr;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use error_location::ErrorLocation;
use log::{info, warn};

/// POST /api/auth/login
///
/// Unknown e-mail and wrong password produce the same 401.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<SessionResponse>> {
    let Json(request) = payload?;
    let email = required_email(request.email)?;
    let password = required_secret(request.password, "password")?;

    let user = UserRepository::new(state.pool.clone())
        .find_by_email(&email)
        .await?;

    let stored_hash = user.as_ref().map(|u| u.password_hash.clone());
    let verified = verify_password(state.credentials.clone(), password, stored_hash).await?;

    let user = match user {
        Some(user) if verified => user,
        _ => {
            warn!("Failed login attempt");
            return Err(invalid_credentials());
        }
    };

    let token = issue_for(&state, &user)?;
    info!("User {} logged in (tenant {})", user.id, user.tenant_id);

    Ok(Json(SessionResponse {
        token,
        user: user.into(),
    }))
}

/// POST /api/auth/signup
///
/// Joins an existing tenant by slug and returns a session for the new user.
pub async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<SessionResponse>)> {
    let Json(request) = payload?;
    let email = required_email(request.email)?;
    let password = required_secret(request.password, "password")?;
    let tenant_slug = required(request.tenant_slug, "tenantSlug")?;

    let tenant = TenantRepository::new(state.pool.clone())
        .find_by_slug(&tenant_slug)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Tenant '{}' not found", tenant_slug)))?;

    let users = UserRepository::new(state.pool.clone());
    if users.find_by_email(&email).await?.is_some() {
        return Err(ApiError::Conflict {
            message: "User already exists".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let role = match request.role.as_deref().map(Role::from_str) {
        Some(Ok(Role::Admin)) => Role::Admin,
        _ => Role::Member,
    };

    let password_hash = hash_password(state.credentials.clone(), password).await?;
    let user = User::new(email, password_hash, role, tenant.id);
    users.create(&user).await?;

    let token = issue_for(&state, &user)?;
    info!(
        "User {} signed up to tenant {} as {}",
        user.id, tenant.slug, user.role
    );

    Ok((
        StatusCode::CREATED,
        Json(SessionResponse {
            token,
            user: user.into(),
        }),
    ))
}

/// GET /api/auth/session
pub async fn session(Authenticated(ctx): Authenticated) -> Json<SessionInfoResponse> {
    Json(SessionInfoResponse::from(&ctx))
}

#[track_caller]
fn issue_for(state: &AppState, user: &User) -> ApiResult<String> {
    let subject = SessionSubject {
        subject_id: user.id,
        tenant_id: user.tenant_id,
        role: user.role,
    };
    Ok(state.codec.issue_default(&subject)?)
}

#[track_caller]
fn invalid_credentials() -> ApiError {
    ApiError::Unauthorized {
        code: "INVALID_CREDENTIALS",
        message: "Invalid credentials".to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}
