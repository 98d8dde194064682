use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_DATABASE_FILENAME, DEFAULT_DATABASE_MAX_CONNECTIONS,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite file, relative to the config directory
    pub path: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_DATABASE_FILENAME),
            max_connections: DEFAULT_DATABASE_MAX_CONNECTIONS,
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let db_path = std::path::Path::new(&self.path);
        if self.path.is_empty() || db_path.is_absolute() || self.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        if self.max_connections == 0 {
            return Err(ConfigError::database(
                "database.max_connections must be at least 1",
            ));
        }

        Ok(())
    }
}
