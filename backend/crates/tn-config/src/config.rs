use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIRECTORY, DatabaseConfig, LoggingConfig, QuotaConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub quota: QuotaConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config from disk and the environment.
    ///
    /// Loading order:
    /// 1. TN_CONFIG_DIR env var, else ./.tenant-notes/
    /// 2. Create the config directory if it doesn't exist
    /// 3. Read config.toml if present, else defaults
    /// 4. Apply TN_* environment overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: TN_CONFIG_DIR env var > ./.tenant-notes/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIRECTORY))
    }

    /// Validate every section. Call after load() so bad config fails at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.quota.validate()?;
        Ok(())
    }

    /// Absolute path to the database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Absolute path to the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(file) => Ok(Some(Self::config_dir()?.join(&self.logging.dir).join(file))),
            None => Ok(None),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  database: {} (max {} connections)",
            self.database.path, self.database.max_connections
        );
        info!(
            "  auth: HS256 secret {}, ttl={}s, leeway={}s, plan lookup timeout={}ms",
            if self.auth.jwt_secret.is_some() {
                "set"
            } else {
                "missing"
            },
            self.auth.token_ttl_secs,
            self.auth.leeway_secs,
            self.auth.plan_lookup_timeout_ms
        );
        info!("  quota: free plan limited to {} notes", self.quota.free_note_limit);
        info!(
            "  logging: {} (colored: {}, file: {})",
            self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("TN_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("TN_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("TN_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "TN_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Auth
        Self::apply_env_option_string("TN_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_parse("TN_AUTH_TOKEN_TTL_SECS", &mut self.auth.token_ttl_secs);
        Self::apply_env_parse("TN_AUTH_LEEWAY_SECS", &mut self.auth.leeway_secs);
        Self::apply_env_parse(
            "TN_AUTH_PLAN_LOOKUP_TIMEOUT_MS",
            &mut self.auth.plan_lookup_timeout_ms,
        );
        Self::apply_env_parse(
            "TN_AUTH_PASSWORD_MEMORY_KIB",
            &mut self.auth.password_memory_kib,
        );
        Self::apply_env_parse(
            "TN_AUTH_PASSWORD_ITERATIONS",
            &mut self.auth.password_iterations,
        );

        // Quota
        Self::apply_env_parse("TN_QUOTA_FREE_NOTE_LIMIT", &mut self.quota.free_note_limit);

        // Logging
        Self::apply_env_parse("TN_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("TN_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("TN_LOG_FILE", &mut self.logging.file);
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparsable values are ignored and the previous value kept
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
