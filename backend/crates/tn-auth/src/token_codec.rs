use crate::claims::TokenClaims;
use crate::{AuthError, Result as AuthErrorResult, SessionClaim, SessionSubject, TokenSettings};

use std::panic::Location;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use log::debug;
use uuid::Uuid;

/// HS256 session token codec.
///
/// Signature verification and expiry checking happen in the same call, so a
/// caller holding a `SessionClaim` always holds an unexpired one.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    default_ttl: Duration,
    leeway: TimeDelta,
}

impl TokenCodec {
    /// Build a codec from injected settings. An empty secret means the
    /// signing secret was never configured.
    #[track_caller]
    pub fn new(settings: &TokenSettings) -> AuthErrorResult<Self> {
        let caller = Location::caller();

        if settings.secret.is_empty() {
            return Err(AuthError::Configuration {
                message: "token signing secret is not configured".to_string(),
                location: ErrorLocation::from(caller),
            });
        }

        let leeway = TimeDelta::from_std(settings.leeway).map_err(|e| {
            AuthError::Configuration {
                message: format!("token leeway out of range: {}", e),
                location: ErrorLocation::from(caller),
            }
        })?;

        // Expiry is checked in `decode_at` against an explicit clock instead.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.leeway = 0;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(&settings.secret),
            decoding_key: DecodingKey::from_secret(&settings.secret),
            validation,
            default_ttl: settings.ttl,
            leeway,
        })
    }

    /// Issue a token with the configured lifetime
    #[track_caller]
    pub fn issue_default(&self, subject: &SessionSubject) -> AuthErrorResult<String> {
        self.issue_at(subject, self.default_ttl, Utc::now())
    }

    #[track_caller]
    pub fn issue(&self, subject: &SessionSubject, ttl: Duration) -> AuthErrorResult<String> {
        self.issue_at(subject, ttl, Utc::now())
    }

    /// Issue a token as if the current time were `now`
    #[track_caller]
    pub fn issue_at(
        &self,
        subject: &SessionSubject,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> AuthErrorResult<String> {
        let caller = Location::caller();
        let out_of_range = |reason: &dyn std::fmt::Display| AuthError::Configuration {
            message: format!("token ttl out of range: {}", reason),
            location: ErrorLocation::from(caller),
        };

        let ttl = TimeDelta::from_std(ttl).map_err(|e| out_of_range(&e))?;
        let expires_at = now
            .checked_add_signed(ttl)
            .ok_or_else(|| out_of_range(&"expiry past the representable date range"))?;

        let claims = TokenClaims {
            sub: subject.subject_id.to_string(),
            tenant_id: subject.tenant_id.to_string(),
            role: subject.role,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            AuthError::Configuration {
                message: format!("failed to sign token: {}", e),
                location: ErrorLocation::from(caller),
            }
        })
    }

    #[track_caller]
    pub fn decode(&self, token: &str) -> AuthErrorResult<SessionClaim> {
        self.decode_at(token, Utc::now())
    }

    /// Verify `token` and check its expiry against `now`.
    ///
    /// Every failure is reported as `InvalidCredential`; the concrete reason
    /// is only logged at debug level.
    #[track_caller]
    pub fn decode_at(&self, token: &str, now: DateTime<Utc>) -> AuthErrorResult<SessionClaim> {
        let caller = Location::caller();
        let invalid = |reason: &dyn std::fmt::Display| {
            debug!("Rejecting session token: {}", reason);
            AuthError::InvalidCredential {
                location: ErrorLocation::from(caller),
            }
        };

        let claims = decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| invalid(&e))?
            .claims;

        let expires_at =
            DateTime::from_timestamp(claims.exp, 0).ok_or_else(|| invalid(&"exp out of range"))?;
        let issued_at =
            DateTime::from_timestamp(claims.iat, 0).ok_or_else(|| invalid(&"iat out of range"))?;

        let deadline = expires_at
            .checked_add_signed(self.leeway)
            .ok_or_else(|| invalid(&"expiry plus leeway out of range"))?;
        if now > deadline {
            return Err(invalid(&"token expired"));
        }

        let subject_id = Uuid::parse_str(&claims.sub).map_err(|e| invalid(&e))?;
        let tenant_id = Uuid::parse_str(&claims.tenant_id).map_err(|e| invalid(&e))?;

        Ok(SessionClaim::new(
            SessionSubject {
                subject_id,
                tenant_id,
                role: claims.role,
            },
            issued_at,
            expires_at,
        ))
    }
}
