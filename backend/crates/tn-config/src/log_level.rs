use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use log::LevelFilter;
use serde::de::{self, Deserialize, Deserializer};

/// `log::LevelFilter` that deserializes from its lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLevel(pub LevelFilter);

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        LogLevel::from_str(&s).map_err(de::Error::custom)
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(log_level: LogLevel) -> Self {
        log_level.0
    }
}

impl Deref for LogLevel {
    type Target = LevelFilter;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.as_str().to_lowercase())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "off" => Ok(LogLevel(LevelFilter::Off)),
            "error" => Ok(LogLevel(LevelFilter::Error)),
            "warn" => Ok(LogLevel(LevelFilter::Warn)),
            "info" => Ok(LogLevel(LevelFilter::Info)),
            "debug" => Ok(LogLevel(LevelFilter::Debug)),
            "trace" => Ok(LogLevel(LevelFilter::Trace)),
            other => Err(format!(
                "unknown log level '{}', expected off|error|warn|info|debug|trace",
                other
            )),
        }
    }
}
