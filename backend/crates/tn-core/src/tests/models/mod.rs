mod note;
mod plan;
mod role;
mod tenant;
