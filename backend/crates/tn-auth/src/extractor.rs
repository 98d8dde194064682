//! Axum extractor wrapping the authorization gate

use crate::{AuthError, AuthorizationGate, IdentityContext};

use std::future::Future;
use std::sync::Arc;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};

/// Verified identity of the caller.
///
/// Declaring this as a handler argument puts the handler behind the gate:
/// when authentication fails the rejection is returned and the handler is
/// never called.
#[derive(Debug, Clone)]
pub struct Authenticated(pub IdentityContext);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
    Arc<AuthorizationGate>: FromRef<S>,
{
    type Rejection = AuthError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        let gate = Arc::<AuthorizationGate>::from_ref(state);

        async move {
            let identity = gate.authenticate(&parts.headers).await?;
            Ok(Authenticated(identity))
        }
    }
}
