mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod quota_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use quota_config::QuotaConfig;
pub use server_config::ServerConfig;

const CONFIG_DIR_ENV: &str = "TN_CONFIG_DIR";
const DEFAULT_CONFIG_DIRECTORY: &str = ".tenant-notes";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "notes.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

const MIN_JWT_SECRET_LENGTH: usize = 32;
const DEFAULT_TOKEN_TTL_SECS: u64 = 60 * 60;
const MIN_TOKEN_TTL_SECS: u64 = 60;
const MAX_TOKEN_TTL_SECS: u64 = 7 * 24 * 60 * 60;
const DEFAULT_LEEWAY_SECS: u64 = 0;
const MAX_LEEWAY_SECS: u64 = 300;
const DEFAULT_PLAN_LOOKUP_TIMEOUT_MS: u64 = 2000;
const MIN_PLAN_LOOKUP_TIMEOUT_MS: u64 = 10;
const MAX_PLAN_LOOKUP_TIMEOUT_MS: u64 = 30_000;
const DEFAULT_PASSWORD_MEMORY_KIB: u32 = 19 * 1024;
const MIN_PASSWORD_MEMORY_KIB: u32 = 1024;
const DEFAULT_PASSWORD_ITERATIONS: u32 = 2;

const DEFAULT_FREE_NOTE_LIMIT: u64 = 3;
const MAX_FREE_NOTE_LIMIT: u64 = 100_000;

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
