//! Status check endpoints.

use axum::{extract::State, Json};
use serde::Deserialize;
use valentine_core::StatusCheck;

use crate::state::AppState;

/// Request to record a status check.
#[derive(Debug, Deserialize)]
pub struct StatusCheckRequest {
    pub client_name: String,
}

/// Record a status check.
pub async fn create_status_check(
    State(state): State<AppState>,
    Json(req): Json<StatusCheckRequest>,
) -> Json<StatusCheck> {
    Json(state.status.record(req.client_name).await)
}

/// List status checks.
pub async fn list_status_checks(State(state): State<AppState>) -> Json<Vec<StatusCheck>> {
    Json(state.status.list().await)
}
