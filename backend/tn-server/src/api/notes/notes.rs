//! Note REST API handlers
//!
//! Every handler is tenant-scoped through the caller's identity. A note from
//! another tenant is indistinguishable from a missing one.

use crate::api::fields::required;
use crate::{
    ApiError, ApiResult, AppState, CreateNoteRequest, NoteDto, NoteListResponse, NoteResponse,
    UpdateNoteRequest,
};

use tn_auth::{
    AuthError, Authenticated, IdentityContext, check_authorship, check_ownership, check_quota,
    note_limit,
};
use tn_core::Note;
use tn_db::{NoteRepository, TenantRepository};

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::Utc;
use log::{debug, info, warn};
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/notes
pub async fn list_notes(
    State(state): State<AppState>,
    Authenticated(ctx): Authenticated,
) -> ApiResult<Json<NoteListResponse>> {
    let notes = NoteRepository::new(state.pool.clone())
        .list_for_tenant(ctx.tenant_id())
        .await?;

    Ok(Json(NoteListResponse {
        notes: notes.into_iter().map(NoteDto::from).collect(),
    }))
}

/// POST /api/notes
///
/// The tenant must still exist; free tenants are held to the note quota.
/// The count check answers early, the conditional insert is what enforces it.
pub async fn create_note(
    State(state): State<AppState>,
    Authenticated(ctx): Authenticated,
    payload: Result<Json<CreateNoteRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<NoteResponse>)> {
    ensure_tenant_exists(&state, &ctx).await?;

    let repo = NoteRepository::new(state.pool.clone());
    let count = repo.count_for_tenant(ctx.tenant_id()).await?;
    check_quota(&ctx, count, &state.quota)?;

    let Json(request) = payload?;
    let title = required(request.title, "title")?;
    Note::validate_title(&title)?;

    let note = Note::new(
        ctx.tenant_id(),
        ctx.subject_id(),
        title,
        request.content.unwrap_or_default(),
    );
    let limit = note_limit(&ctx, &state.quota);
    if !repo.create_within_limit(&note, limit).await? {
        warn!(
            "Note quota reached for tenant {} during concurrent create",
            ctx.tenant_id()
        );
        return Err(AuthError::quota_exceeded(state.quota.free_limit).into());
    }

    info!(
        "Note {} created in tenant {} ({} before)",
        note.id,
        ctx.tenant_id(),
        count
    );

    Ok((
        StatusCode::CREATED,
        Json(NoteResponse { note: note.into() }),
    ))
}

/// GET /api/notes/{id}
pub async fn get_note(
    State(state): State<AppState>,
    Authenticated(ctx): Authenticated,
    Path(id): Path<String>,
) -> ApiResult<Json<NoteResponse>> {
    let note = owned_note(&state, &ctx, &id).await?;

    Ok(Json(NoteResponse { note: note.into() }))
}

/// PUT /api/notes/{id}
///
/// Author or tenant admin only.
pub async fn update_note(
    State(state): State<AppState>,
    Authenticated(ctx): Authenticated,
    Path(id): Path<String>,
    payload: Result<Json<UpdateNoteRequest>, JsonRejection>,
) -> ApiResult<Json<NoteResponse>> {
    let mut note = owned_note(&state, &ctx, &id).await?;
    check_authorship(&ctx, note.user_id)?;

    let Json(request) = payload?;
    if let Some(title) = request.title {
        Note::validate_title(&title)?;
        note.title = title.trim().to_string();
    }
    if let Some(content) = request.content {
        note.content = content;
    }
    note.updated_at = Utc::now();

    if !NoteRepository::new(state.pool.clone()).update(&note).await? {
        return Err(ApiError::not_found("Resource not found"));
    }

    debug!("Note {} updated by {}", note.id, ctx.subject_id());

    Ok(Json(NoteResponse { note: note.into() }))
}

/// DELETE /api/notes/{id}
///
/// Author or tenant admin only.
pub async fn delete_note(
    State(state): State<AppState>,
    Authenticated(ctx): Authenticated,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let note = owned_note(&state, &ctx, &id).await?;
    check_authorship(&ctx, note.user_id)?;

    if !NoteRepository::new(state.pool.clone()).delete(note.id).await? {
        return Err(ApiError::not_found("Resource not found"));
    }

    info!("Note {} deleted by {}", note.id, ctx.subject_id());

    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Helpers
// =============================================================================

/// Load a note and run the ownership check on it.
async fn owned_note(state: &AppState, ctx: &IdentityContext, id: &str) -> ApiResult<Note> {
    let note_id = Uuid::parse_str(id)?;

    let note = NoteRepository::new(state.pool.clone())
        .find_by_id(note_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Resource not found"))?;

    check_ownership(ctx, note.tenant_id)?;

    Ok(note)
}

/// A resolved plan proves the tenant exists. Without one (tenant deleted or
/// lookup timed out) ask storage directly; quota then treats the tenant as free.
async fn ensure_tenant_exists(state: &AppState, ctx: &IdentityContext) -> ApiResult<()> {
    if ctx.plan().is_some() {
        return Ok(());
    }

    TenantRepository::new(state.pool.clone())
        .find_by_id(ctx.tenant_id())
        .await?
        .map(|_| ())
        .ok_or_else(|| ApiError::not_found("Tenant not found"))
}
