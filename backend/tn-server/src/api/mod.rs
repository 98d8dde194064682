pub mod auth;
pub mod error;
pub mod notes;
pub mod tenants;

pub(crate) mod blocking;
pub(crate) mod fields;
