pub mod note;
pub mod plan;
pub mod role;
pub mod tenant;
pub mod user;
