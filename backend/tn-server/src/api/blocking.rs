//! Argon2 work runs on the blocking pool so it never stalls the runtime.

use crate::{ApiError, ApiResult};

use tn_auth::CredentialVerifier;

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;

pub(crate) async fn hash_password(
    credentials: Arc<CredentialVerifier>,
    password: String,
) -> ApiResult<String> {
    let hash = tokio::task::spawn_blocking(move || credentials.hash(&password))
        .await
        .map_err(join_error)??;
    Ok(hash)
}

/// `None` spends a dummy verification and always fails.
pub(crate) async fn verify_password(
    credentials: Arc<CredentialVerifier>,
    password: String,
    hash: Option<String>,
) -> ApiResult<bool> {
    tokio::task::spawn_blocking(move || match hash {
        Some(hash) => credentials.verify(&password, &hash),
        None => credentials.verify_dummy(&password),
    })
    .await
    .map_err(join_error)
}

#[track_caller]
fn join_error(e: tokio::task::JoinError) -> ApiError {
    ApiError::Internal {
        message: format!("password task failed: {}", e),
        location: ErrorLocation::from(Location::caller()),
    }
}
