//! Unified error types for the Animal API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Errors raised by ports and their adapters
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Database error: {0}")]
    Database(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    /// A port call failed; `context` names the operation that was running
    #[error("{context}: {source}")]
    Service {
        context: &'static str,
        #[source]
        source: DomainError,
    },
}

impl AppError {
    pub fn service(context: &'static str, source: DomainError) -> Self {
        AppError::Service { context, source }
    }
}

/// Error response body for JSON responses
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn internal() -> Self {
        Self {
            error: "Internal server error".to_string(),
            details: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Service { context, source } => {
                tracing::error!(error = %source, "{}", context);
            }
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal()),
        )
            .into_response()
    }
}
