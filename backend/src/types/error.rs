//! Universal error handling for the API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use crate::nasa::NasaError;

/// Application error type that wraps an HTTP status and JSON body
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    body: Value,
}

impl AppError {
    /// 400 response for a request missing required query parameters
    #[must_use]
    pub fn missing_params(message: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: json!({ "error": message }),
        }
    }

    /// Generic 500 response; no internal detail reaches the caller
    #[must_use]
    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: json!({ "error": "Internal server error" }),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error based on status code
        match self.status.as_u16() {
            400..=499 => tracing::warn!("Client error: {}", self.body),
            500..=599 => tracing::error!("Server error: {}", self.body),
            _ => {}
        }

        (self.status, Json(self.body)).into_response()
    }
}

/// Upstream failures surface as 400 with the operation's fixed label and
/// whatever the upstream or transport reported
impl From<NasaError> for AppError {
    fn from(err: NasaError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: json!({ "error": err.label(), "details": err.details() }),
        }
    }
}
