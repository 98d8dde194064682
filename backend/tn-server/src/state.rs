use crate::DbPlanSource;
use crate::error::Result as ServerErrorResult;

use tn_auth::{
    AuthorizationGate, CredentialVerifier, NoteQuota, PasswordSettings, TokenCodec, TokenSettings,
};
use tn_config::Config;

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

/// Shared handler state. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub gate: Arc<AuthorizationGate>,
    pub codec: Arc<TokenCodec>,
    pub credentials: Arc<CredentialVerifier>,
    pub quota: NoteQuota,
}

impl AppState {
    /// Wire the auth layer from validated config.
    pub fn from_config(pool: SqlitePool, config: &Config) -> ServerErrorResult<Self> {
        let secret = config.auth.jwt_secret.clone().unwrap_or_default();
        let codec = TokenCodec::new(&TokenSettings {
            secret: secret.into_bytes(),
            ttl: config.auth.token_ttl(),
            leeway: config.auth.leeway(),
        })?;

        let credentials = CredentialVerifier::new(PasswordSettings {
            memory_kib: config.auth.password_memory_kib,
            iterations: config.auth.password_iterations,
            ..PasswordSettings::default()
        })?;

        let quota = NoteQuota {
            free_limit: config.quota.free_note_limit,
        };

        Ok(Self::new(
            pool,
            codec,
            credentials,
            quota,
            config.auth.plan_lookup_timeout(),
        ))
    }

    pub fn new(
        pool: SqlitePool,
        codec: TokenCodec,
        credentials: CredentialVerifier,
        quota: NoteQuota,
        plan_lookup_timeout: std::time::Duration,
    ) -> Self {
        let codec = Arc::new(codec);
        let plans = Arc::new(DbPlanSource::new(pool.clone()));
        let gate = Arc::new(AuthorizationGate::new(
            codec.clone(),
            plans,
            plan_lookup_timeout,
        ));

        Self {
            pool,
            gate,
            codec,
            credentials: Arc::new(credentials),
            quota,
        }
    }
}

impl FromRef<AppState> for Arc<AuthorizationGate> {
    fn from_ref(state: &AppState) -> Self {
        state.gate.clone()
    }
}
