use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_LEEWAY_SECS, DEFAULT_PASSWORD_ITERATIONS,
    DEFAULT_PASSWORD_MEMORY_KIB, DEFAULT_PLAN_LOOKUP_TIMEOUT_MS, DEFAULT_TOKEN_TTL_SECS,
    MAX_LEEWAY_SECS, MAX_PLAN_LOOKUP_TIMEOUT_MS, MAX_TOKEN_TTL_SECS, MIN_JWT_SECRET_LENGTH,
    MIN_PASSWORD_MEMORY_KIB, MIN_PLAN_LOOKUP_TIMEOUT_MS, MIN_TOKEN_TTL_SECS,
};

use std::time::Duration;

use serde::Deserialize;

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret. Required; there is no built-in fallback.
    pub jwt_secret: Option<String>,
    pub token_ttl_secs: u64,
    /// Clock skew tolerated when checking token expiry
    pub leeway_secs: u64,
    /// Upper bound on the per-request plan lookup
    pub plan_lookup_timeout_ms: u64,
    pub password_memory_kib: u32,
    pub password_iterations: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
            leeway_secs: DEFAULT_LEEWAY_SECS,
            plan_lookup_timeout_ms: DEFAULT_PLAN_LOOKUP_TIMEOUT_MS,
            password_memory_kib: DEFAULT_PASSWORD_MEMORY_KIB,
            password_iterations: DEFAULT_PASSWORD_ITERATIONS,
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "<redacted>"))
            .field("token_ttl_secs", &self.token_ttl_secs)
            .field("leeway_secs", &self.leeway_secs)
            .field("plan_lookup_timeout_ms", &self.plan_lookup_timeout_ms)
            .field("password_memory_kib", &self.password_memory_kib)
            .field("password_iterations", &self.password_iterations)
            .finish()
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match &self.jwt_secret {
            None => {
                return Err(ConfigError::auth(
                    "auth.jwt_secret is required (set TN_AUTH_JWT_SECRET)",
                ));
            }
            Some(secret) if secret.len() < MIN_JWT_SECRET_LENGTH => {
                return Err(ConfigError::auth(format!(
                    "auth.jwt_secret must be at least {} characters, got {}",
                    MIN_JWT_SECRET_LENGTH,
                    secret.len()
                )));
            }
            Some(_) => {}
        }

        if !(MIN_TOKEN_TTL_SECS..=MAX_TOKEN_TTL_SECS).contains(&self.token_ttl_secs) {
            return Err(ConfigError::auth(format!(
                "auth.token_ttl_secs must be between {} and {}, got {}",
                MIN_TOKEN_TTL_SECS, MAX_TOKEN_TTL_SECS, self.token_ttl_secs
            )));
        }

        if self.leeway_secs > MAX_LEEWAY_SECS {
            return Err(ConfigError::auth(format!(
                "auth.leeway_secs must be <= {}, got {}",
                MAX_LEEWAY_SECS, self.leeway_secs
            )));
        }

        if !(MIN_PLAN_LOOKUP_TIMEOUT_MS..=MAX_PLAN_LOOKUP_TIMEOUT_MS)
            .contains(&self.plan_lookup_timeout_ms)
        {
            return Err(ConfigError::auth(format!(
                "auth.plan_lookup_timeout_ms must be between {} and {}, got {}",
                MIN_PLAN_LOOKUP_TIMEOUT_MS, MAX_PLAN_LOOKUP_TIMEOUT_MS, self.plan_lookup_timeout_ms
            )));
        }

        if self.password_memory_kib < MIN_PASSWORD_MEMORY_KIB {
            return Err(ConfigError::auth(format!(
                "auth.password_memory_kib must be >= {}, got {}",
                MIN_PASSWORD_MEMORY_KIB, self.password_memory_kib
            )));
        }

        if self.password_iterations == 0 {
            return Err(ConfigError::auth("auth.password_iterations must be >= 1"));
        }

        Ok(())
    }

    pub fn token_ttl(&self) -> Duration {
        Duration::from_secs(self.token_ttl_secs)
    }

    pub fn leeway(&self) -> Duration {
        Duration::from_secs(self.leeway_secs)
    }

    pub fn plan_lookup_timeout(&self) -> Duration {
        Duration::from_millis(self.plan_lookup_timeout_ms)
    }
}
