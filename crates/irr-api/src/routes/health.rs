//! Readiness and health check endpoints.

use axum::Json;
use serde::{Deserialize, Serialize};

/// Plain-text readiness message served at `/`.
pub const READY_MESSAGE: &str = "API ready to use!";

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Readiness endpoint.
pub async fn ready() -> &'static str {
    READY_MESSAGE
}

/// Health check endpoint.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
