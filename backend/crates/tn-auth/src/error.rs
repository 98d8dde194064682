use tn_core::Role;

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Missing or malformed authorization header {location}")]
    MissingCredential { location: ErrorLocation },

    /// Malformed, wrongly signed and expired tokens all land here.
    #[error("Invalid or expired token {location}")]
    InvalidCredential { location: ErrorLocation },

    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    /// Also used for resources owned by another tenant.
    #[error("Resource not found {location}")]
    NotFound { location: ErrorLocation },

    #[error("Note quota exceeded: plan allows {limit} notes {location}")]
    QuotaExceeded { limit: u64, location: ErrorLocation },

    #[error("Tenant lookup failed for {tenant_id}: {message} {location}")]
    Storage {
        tenant_id: Uuid,
        message: String,
        location: ErrorLocation,
    },

    #[error("Auth configuration error: {message} {location}")]
    Configuration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Password hashing failed: {message} {location}")]
    Hashing {
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingCredential { .. } | Self::InvalidCredential { .. } => {
                StatusCode::UNAUTHORIZED
            }
            Self::Forbidden { .. } | Self::QuotaExceeded { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Storage { .. } | Self::Configuration { .. } | Self::Hashing { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingCredential { .. } => "MISSING_CREDENTIAL",
            Self::InvalidCredential { .. } => "INVALID_CREDENTIAL",
            Self::Forbidden { .. } => "FORBIDDEN",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::QuotaExceeded { .. } => "QUOTA_EXCEEDED",
            Self::Storage { .. } | Self::Configuration { .. } | Self::Hashing { .. } => {
                "INTERNAL_ERROR"
            }
        }
    }

    /// Message safe to return to clients (no locations, no internals)
    pub fn public_message(&self) -> String {
        match self {
            Self::MissingCredential { .. } => "Missing Authorization header".to_string(),
            Self::InvalidCredential { .. } => "Invalid or expired token".to_string(),
            Self::Forbidden { message, .. } => format!("Forbidden: {}", message),
            Self::NotFound { .. } => "Resource not found".to_string(),
            Self::QuotaExceeded { limit, .. } => format!(
                "Free plan limit of {} notes reached. Upgrade to Pro.",
                limit
            ),
            Self::Storage { .. } | Self::Configuration { .. } | Self::Hashing { .. } => {
                "Internal server error".to_string()
            }
        }
    }

    #[track_caller]
    pub fn quota_exceeded(limit: u64) -> Self {
        Self::QuotaExceeded {
            limit,
            location: ErrorLocation::from(std::panic::Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn role_required(required: Role) -> Self {
        Self::Forbidden {
            message: format!("requires {} role", required),
            location: ErrorLocation::from(std::panic::Location::caller()),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::debug!("{}", self);
        }

        let body = json!({
            "error": {
                "code": self.error_code(),
                "message": self.public_message(),
            }
        });

        let mut response = (status, Json(body)).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
