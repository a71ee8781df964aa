//! Liveness and readiness endpoints

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::ports::ConnectionPool;
use crate::error::ErrorResponse;
use crate::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub started_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReadyResponse {
    pub status: String,
    pub open_connections: u32,
    pub idle: u32,
    pub wait_count: u64,
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        started_at: state.started_at,
    })
}

/// GET /ready
///
/// Pings the database pool. 503 when a connection cannot be checked out.
pub async fn ready(State(state): State<AppState>) -> Response {
    match state.pool.ping().await {
        Ok(()) => {
            let stats = state.pool.stats();
            Json(ReadyResponse {
                status: "ready".to_string(),
                open_connections: stats.open_connections,
                idle: stats.idle,
                wait_count: stats.wait_count,
            })
            .into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse {
                    error: "Database unavailable".to_string(),
                    details: Some(e.to_string()),
                }),
            )
                .into_response()
        }
    }
}
