use std::time::Duration;

/// Default session lifetime (1 hour)
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(60 * 60);

/// Signing configuration handed to `TokenCodec::new`
#[derive(Clone)]
pub struct TokenSettings {
    /// HMAC-SHA256 signing secret
    pub secret: Vec<u8>,
    /// Lifetime of tokens issued through `TokenCodec::issue_default`
    pub ttl: Duration,
    /// Clock skew tolerated when checking expiry
    pub leeway: Duration,
}

impl TokenSettings {
    pub fn with_secret(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
            ttl: DEFAULT_TOKEN_TTL,
            leeway: Duration::ZERO,
        }
    }
}

impl std::fmt::Debug for TokenSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSettings")
            .field("secret", &"<redacted>")
            .field("ttl", &self.ttl)
            .field("leeway", &self.leeway)
            .finish()
    }
}
