use tn_server::{AppState, build_router, logger};

use std::error::Error;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env is fine
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = tn_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting tn-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let database_path = config.database_path()?;
    info!("Opening database: {}", database_path.display());
    let pool = tn_db::create_pool(&database_path, config.database.max_connections).await?;

    let state = AppState::from_config(pool.clone(), &config)?;
    let app = build_router(state);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    // Port 0 means the OS picked one
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
