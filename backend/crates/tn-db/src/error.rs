use tn_core::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    /// A stored column could not be mapped back to a domain value
    #[error("Failed to decode {column}: {message} {location}")]
    Decode {
        column: String,
        message: String,
        location: ErrorLocation,
    },

    /// A unique constraint rejected the write
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },
}

impl DbError {
    /// Map unique-constraint violations to `Conflict`, everything else to `Sqlx`.
    #[track_caller]
    pub(crate) fn from_write(source: sqlx::Error, conflict_message: &str) -> Self {
        let is_unique = matches!(
            &source,
            sqlx::Error::Database(db_err) if db_err.is_unique_violation()
        );

        if is_unique {
            Self::Conflict {
                message: conflict_message.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        } else {
            Self::Sqlx {
                source,
                location: ErrorLocation::from(Location::caller()),
            }
        }
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
