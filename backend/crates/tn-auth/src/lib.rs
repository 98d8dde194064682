//! Session and authorization layer.
//!
//! `TokenCodec` issues and decodes session tokens, `AuthorizationGate` turns a
//! bearer header into an `IdentityContext`, and the functions in `policy`
//! are layered on top of that context by route handlers.

pub mod claims;
pub mod credentials;
pub mod error;
pub mod extractor;
pub mod gate;
pub mod identity_context;
pub mod plan_source;
pub mod policy;
pub mod token_codec;
pub mod token_settings;

pub use claims::{SessionClaim, SessionSubject};
pub use credentials::{CredentialVerifier, PasswordSettings};
pub use error::{AuthError, Result};
pub use extractor::Authenticated;
pub use gate::AuthorizationGate;
pub use identity_context::IdentityContext;
pub use plan_source::{InMemoryPlanSource, PlanSource};
pub use policy::{
    NoteQuota, check_authorship, check_ownership, check_quota, note_limit, require_role,
};
pub use token_codec::TokenCodec;
pub use token_settings::TokenSettings;

#[cfg(test)]
mod tests;
