//! Health check and API root.

use axum::Json;
use serde::Serialize;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check endpoint.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// API root response.
#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

/// Greeting at the API root.
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Valentine Proposal API",
    })
}
