use crate::{ConfigError, ConfigErrorResult, DEFAULT_FREE_NOTE_LIMIT, MAX_FREE_NOTE_LIMIT};

use serde::Deserialize;

/// Plan quotas. Pro tenants are never limited.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct QuotaConfig {
    /// Maximum notes a free tenant may hold
    pub free_note_limit: u64,
}

impl Default for QuotaConfig {
    fn default() -> Self {
        Self {
            free_note_limit: DEFAULT_FREE_NOTE_LIMIT,
        }
    }
}

impl QuotaConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.free_note_limit > MAX_FREE_NOTE_LIMIT {
            return Err(ConfigError::quota(format!(
                "quota.free_note_limit must be <= {}, got {}",
                MAX_FREE_NOTE_LIMIT, self.free_note_limit
            )));
        }
        Ok(())
    }
}
