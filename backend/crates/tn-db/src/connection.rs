use crate::{DbError, Result as DbErrorResult};

use tn_core::ErrorLocation;

use std::panic::Location;
use std::path::Path;

use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

/// Open (creating if needed) the SQLite file at `path` and bring its schema up to date.
pub async fn create_pool(path: &Path, max_connections: u32) -> DbErrorResult<SqlitePool> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| DbError::Initialization {
                message: format!("Failed to create database directory: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;

    info!("Database ready at {}", path.display());

    Ok(pool)
}

/// In-memory database with migrations applied.
///
/// Each SQLite connection to `:memory:` is its own database, so the pool is
/// pinned to a single connection.
pub async fn create_in_memory_pool() -> DbErrorResult<SqlitePool> {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;

    Ok(pool)
}

pub async fn run_migrations(pool: &SqlitePool) -> DbErrorResult<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| DbError::Migration {
            message: format!("Migration failed: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(())
}
