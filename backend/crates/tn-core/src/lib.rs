pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::note::Note;
pub use models::plan::Plan;
pub use models::role::Role;
pub use models::tenant::Tenant;
pub use models::user::User;

#[cfg(test)]
mod tests;
