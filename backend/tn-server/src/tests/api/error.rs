use crate::ApiError;

use tn_auth::AuthError;
use tn_core::CoreError;
use tn_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::{StatusCode, header};
use http_body_util::BodyExt;
use uuid::Uuid;

fn here() -> ErrorLocation {
    ErrorLocation::from(Location::caller())
}

async fn body_json(error: ApiError) -> (StatusCode, http::HeaderMap, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let (status, _, json) = body_json(ApiError::not_found("Note not found")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Note not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let (status, _, json) = body_json(ApiError::validation("title is required", "title")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "title");
}

#[tokio::test]
async fn test_missing_credential_maps_to_401_with_challenge() {
    let error = ApiError::from(AuthError::MissingCredential { location: here() });

    let (status, headers, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(headers.get(header::WWW_AUTHENTICATE).unwrap(), "Bearer");
    assert_eq!(json["error"]["code"], "MISSING_CREDENTIAL");
}

#[tokio::test]
async fn test_invalid_credential_maps_to_401() {
    let error = ApiError::from(AuthError::InvalidCredential { location: here() });

    let (status, _, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "INVALID_CREDENTIAL");
}

#[tokio::test]
async fn test_forbidden_and_quota_map_to_403_with_distinct_codes() {
    let forbidden = ApiError::from(AuthError::Forbidden {
        message: "requires admin role".into(),
        location: here(),
    });
    let quota = ApiError::from(AuthError::QuotaExceeded {
        limit: 3,
        location: here(),
    });

    let (forbidden_status, forbidden_headers, forbidden_json) = body_json(forbidden).await;
    let (quota_status, _, quota_json) = body_json(quota).await;

    assert_eq!(forbidden_status, StatusCode::FORBIDDEN);
    assert!(forbidden_headers.get(header::WWW_AUTHENTICATE).is_none());
    assert_eq!(forbidden_json["error"]["code"], "FORBIDDEN");
    assert_eq!(quota_status, StatusCode::FORBIDDEN);
    assert_eq!(quota_json["error"]["code"], "QUOTA_EXCEEDED");
    assert!(
        quota_json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("Upgrade to Pro")
    );
}

#[tokio::test]
async fn test_auth_not_found_maps_to_404() {
    let error = ApiError::from(AuthError::NotFound { location: here() });

    let (status, _, _) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_storage_failure_maps_to_500_without_details() {
    let error = ApiError::from(AuthError::Storage {
        tenant_id: Uuid::new_v4(),
        message: "disk I/O error".into(),
        location: here(),
    });

    let (status, _, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert!(!json.to_string().contains("disk I/O"));
}

#[tokio::test]
async fn test_db_conflict_maps_to_409() {
    let error = ApiError::from(DbError::Conflict {
        message: "a user with this e-mail already exists".into(),
        location: here(),
    });

    let (status, _, json) = body_json(error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn test_db_failure_maps_to_500_with_generic_message() {
    let error = ApiError::from(DbError::Migration {
        message: "table notes already exists".into(),
        location: here(),
    });

    let (status, _, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["message"], "Database operation failed");
}

#[tokio::test]
async fn test_core_validation_keeps_field() {
    let error = ApiError::from(CoreError::Validation {
        message: "Title cannot be empty".into(),
        field: Some("title".into()),
        location: here(),
    });

    let (status, _, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["field"], "title");
}

#[tokio::test]
async fn test_invalid_role_maps_to_400_on_role_field() {
    let error = ApiError::from(CoreError::InvalidRole {
        value: "owner".into(),
        location: here(),
    });

    let (status, _, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["field"], "role");
}

#[tokio::test]
async fn test_uuid_error_maps_to_400() {
    let error = ApiError::from(Uuid::parse_str("not-a-uuid").unwrap_err());

    let (status, _, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
}
