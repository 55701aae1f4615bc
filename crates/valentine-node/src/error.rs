//! Mapping of store errors onto HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use valentine_core::ValentineError;

/// Error returned by API handlers.
#[derive(Error, Debug)]
#[error(transparent)]
pub struct ApiError(#[from] pub ValentineError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            ValentineError::NotFound { .. } => StatusCode::NOT_FOUND,
            ValentineError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ValentineError::Http { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn detail(&self) -> String {
        match &self.0 {
            ValentineError::NotFound { resource_type, .. } => format!("{resource_type} not found"),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "Request failed");
        }

        (status, Json(json!({ "detail": self.detail() }))).into_response()
    }
}
