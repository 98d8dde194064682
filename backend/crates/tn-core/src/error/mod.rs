use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid role: {value} {location}")]
    InvalidRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid plan: {value} {location}")]
    InvalidPlan {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
