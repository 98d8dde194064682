use crate::{DEFAULT_LOG_DIRECTORY, DEFAULT_LOG_LEVEL, LogLevel};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Colored output when logging to stdout
    pub colored: bool,
    /// Log file name inside `dir`; None logs to stdout
    pub file: Option<String>,
    /// Log directory, relative to the config directory
    pub dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(DEFAULT_LOG_LEVEL),
            colored: true,
            file: None,
            dir: String::from(DEFAULT_LOG_DIRECTORY),
        }
    }
}
