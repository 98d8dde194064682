pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod plan_source;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{login, session, signup},
        login_request::LoginRequest,
        session_info_response::SessionInfoResponse,
        session_response::SessionResponse,
        signup_request::SignupRequest,
        user_dto::UserDto,
    },
    error::ApiError,
    error::Result as ApiResult,
    notes::{
        create_note_request::CreateNoteRequest,
        note_dto::NoteDto,
        note_list_response::NoteListResponse,
        note_response::NoteResponse,
        notes::{create_note, delete_note, get_note, list_notes, update_note},
        update_note_request::UpdateNoteRequest,
    },
    tenants::{
        invite_request::InviteRequest,
        invite_response::InviteResponse,
        tenant_dto::TenantDto,
        tenants::{invite_user, upgrade_tenant},
        upgrade_response::UpgradeResponse,
    },
};
pub use plan_source::DbPlanSource;
pub use routes::build_router;
pub use state::AppState;
