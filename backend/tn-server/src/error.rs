use thiserror::Error;

/// Startup failures. Request-time errors are `ApiError`.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] tn_config::ConfigError),

    #[error("Auth setup error: {0}")]
    Auth(#[from] tn_auth::AuthError),

    #[error("Database error: {0}")]
    Database(#[from] tn_db::DbError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
