//! Request field helpers shared by the handlers.

use crate::{ApiError, ApiResult};

/// A present, non-blank string field. Returned trimmed.
#[track_caller]
pub(crate) fn required(value: Option<String>, field: &str) -> ApiResult<String> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(ApiError::validation(format!("{} is required", field), field)),
    }
}

/// Like `required`, but the value is kept verbatim.
#[track_caller]
pub(crate) fn required_secret(value: Option<String>, field: &str) -> ApiResult<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ApiError::validation(format!("{} is required", field), field)),
    }
}

/// E-mail addresses are stored and looked up lowercased.
#[track_caller]
pub(crate) fn required_email(value: Option<String>) -> ApiResult<String> {
    let email = required(value, "email")?.to_lowercase();
    if !email.contains('@') {
        return Err(ApiError::validation("email is not a valid address", "email"));
    }
    Ok(email)
}
