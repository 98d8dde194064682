use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::warn;
use serde_json::json;

/// GET /health - component status
pub async fn health(State(state): State<AppState>) -> Response {
    let database = if database_reachable(&state).await {
        "operational"
    } else {
        "unavailable"
    };

    let body = json!({
        "status": if database == "operational" { "healthy" } else { "degraded" },
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "database": database,
            "auth": "operational",
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(body)).into_response()
}

/// GET /live - liveness probe; responding is enough
pub async fn liveness() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - readiness probe; requires a working database
pub async fn readiness(State(state): State<AppState>) -> Response {
    if database_reachable(&state).await {
        (StatusCode::OK, "Ready").into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "Database unavailable").into_response()
    }
}

async fn database_reachable(state: &AppState) -> bool {
    match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => true,
        Err(e) => {
            warn!("Database health check failed: {}", e);
            false
        }
    }
}
