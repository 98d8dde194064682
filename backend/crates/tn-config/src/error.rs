use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("{category} error: {message} {location}")]
    Generic {
        category: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    /// Create an auth error
    #[track_caller]
    pub fn auth<S: Into<String>>(message: S) -> Self {
        Self::generic("Auth", message)
    }

    /// Create a config error
    #[track_caller]
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::generic("Config", message)
    }

    /// Create a database error
    #[track_caller]
    pub fn database<S: Into<String>>(message: S) -> Self {
        Self::generic("Database", message)
    }

    /// Create a quota error
    #[track_caller]
    pub fn quota<S: Into<String>>(message: S) -> Self {
        Self::generic("Quota", message)
    }

    /// Create a server error
    #[track_caller]
    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::generic("Server", message)
    }

    #[track_caller]
    fn generic<S: Into<String>>(category: &'static str, message: S) -> Self {
        ConfigError::Generic {
            category,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
