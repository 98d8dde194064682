mod error;
mod fields;
