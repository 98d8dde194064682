//! REST API error types
//!
//! Every handler failure is rendered as
//! `{"error": {"code", "message", "field"?}}` with the matching status.

use tn_auth::AuthError;
use tn_core::CoreError;
use tn_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "QUOTA_EXCEEDED")
    pub code: String,
    pub message: String,
    /// Offending request field for validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// 401, always sent with `WWW-Authenticate: Bearer`
    #[error("Unauthorized ({code}): {message} {location}")]
    Unauthorized {
        code: &'static str,
        message: String,
        location: ErrorLocation,
    },

    /// 403 for role, authorship and quota failures
    #[error("Forbidden ({code}): {message} {location}")]
    Forbidden {
        code: &'static str,
        message: String,
        location: ErrorLocation,
    },

    /// 404, including resources owned by another tenant
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// 400
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// 409
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// 400
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// 500
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden { .. } => StatusCode::FORBIDDEN,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Validation { .. } | ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(message: impl Into<String>, field: &str) -> Self {
        ApiError::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::debug!("{}", self);
        }

        let body = match self {
            ApiError::Unauthorized { code, message, .. }
            | ApiError::Forbidden { code, message, .. } => ApiErrorBody {
                code: code.into(),
                message,
                field: None,
            },
            ApiError::NotFound { message, .. } => ApiErrorBody {
                code: "NOT_FOUND".into(),
                message,
                field: None,
            },
            ApiError::Validation { message, field, .. } => ApiErrorBody {
                code: "VALIDATION_ERROR".into(),
                message,
                field,
            },
            ApiError::Conflict { message, .. } => ApiErrorBody {
                code: "CONFLICT".into(),
                message,
                field: None,
            },
            ApiError::BadRequest { message, .. } => ApiErrorBody {
                code: "BAD_REQUEST".into(),
                message,
                field: None,
            },
            ApiError::Internal { message, .. } => ApiErrorBody {
                code: "INTERNAL_ERROR".into(),
                message,
                field: None,
            },
        };

        let mut response = (status, Json(ApiErrorResponse { error: body })).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}

/// One status mapping for every auth failure
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        let code = e.error_code();
        let message = e.public_message();

        match e {
            AuthError::MissingCredential { .. } | AuthError::InvalidCredential { .. } => {
                ApiError::Unauthorized {
                    code,
                    message,
                    location,
                }
            }
            AuthError::Forbidden { .. } | AuthError::QuotaExceeded { .. } => ApiError::Forbidden {
                code,
                message,
                location,
            },
            AuthError::NotFound { .. } => ApiError::NotFound { message, location },
            AuthError::Storage { .. }
            | AuthError::Configuration { .. }
            | AuthError::Hashing { .. } => {
                log::error!("Auth infrastructure failure: {}", e);
                ApiError::Internal { message, location }
            }
        }
    }
}

impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            CoreError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location,
            },
            CoreError::InvalidRole { value, .. } => ApiError::Validation {
                message: format!("Invalid role '{}'", value),
                field: Some("role".to_string()),
                location,
            },
            CoreError::InvalidPlan { value, .. } => ApiError::Validation {
                message: format!("Invalid plan '{}'", value),
                field: Some("plan".to_string()),
                location,
            },
        }
    }
}

impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            DbError::Conflict { message, .. } => ApiError::Conflict { message, location },
            other => {
                // Don't expose internal database details to clients
                log::error!("Database error: {}", other);
                ApiError::Internal {
                    message: "Database operation failed".to_string(),
                    location,
                }
            }
        }
    }
}

impl From<sqlx::Error> for ApiError {
    #[track_caller]
    fn from(e: sqlx::Error) -> Self {
        log::error!("Database error: {}", e);
        ApiError::Internal {
            message: "Database operation failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::Validation {
            message: format!("Invalid UUID format: {}", e),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Malformed or mistyped JSON bodies are a 400, not axum's default 422
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(e: JsonRejection) -> Self {
        ApiError::BadRequest {
            message: e.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
