pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::{create_in_memory_pool, create_pool, run_migrations};
pub use error::{DbError, Result};
pub use repositories::note_repository::NoteRepository;
pub use repositories::tenant_repository::TenantRepository;
pub use repositories::user_repository::UserRepository;
