use tn_core::Role;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who a token is issued for. The input side of `TokenCodec::issue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSubject {
    pub subject_id: Uuid,
    pub tenant_id: Uuid,
    pub role: Role,
}

/// A verified session.
///
/// Only `TokenCodec::decode` constructs this, after the signature and the
/// expiry have both been checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionClaim {
    subject: SessionSubject,
    issued_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl SessionClaim {
    pub(crate) fn new(
        subject: SessionSubject,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            subject,
            issued_at,
            expires_at,
        }
    }

    pub fn subject_id(&self) -> Uuid {
        self.subject.subject_id
    }

    pub fn tenant_id(&self) -> Uuid {
        self.subject.tenant_id
    }

    pub fn role(&self) -> Role {
        self.subject.role
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }
}

/// JWT payload as it appears on the wire.
///
/// The tenant plan is deliberately absent: it is resolved per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct TokenClaims {
    /// Subject (user id)
    pub sub: String,
    pub tenant_id: String,
    pub role: Role,
    /// Issued at (Unix seconds)
    pub iat: i64,
    /// Expiration (Unix seconds)
    pub exp: i64,
}
