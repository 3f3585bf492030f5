//! Error handling module
//!
//! Defines error types and handling logic used in the project

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed client-facing message for upstream failures; the real cause is
/// logged server-side only
pub const UPSTREAM_ERROR_MESSAGE: &str = "An error occurred during your request.";

/// Client-facing message when no provider credential is configured
pub const MISSING_API_KEY_MESSAGE: &str = "provider API key not configured";

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Provider credential missing; the provider is never called
    #[error("provider API key not configured")]
    MissingApiKey,

    /// Request validation failed
    #[error("Request validation failed: {0}")]
    Validation(String),

    /// The provider returned a structured error; status and payload are
    /// forwarded to the caller unchanged
    #[error("provider returned status {status}")]
    Provider {
        status: u16,
        payload: serde_json::Value,
    },

    /// Transport or unexpected upstream failure; the detail string stays
    /// server-side
    #[error("upstream request failed: {0}")]
    Upstream(String),
}

/// Error response body: `{ "error": { "message": "..." } }`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                message: message.into(),
            },
        }
    }
}

impl AppError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingApiKey => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Provider { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            AppError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message shown to the caller
    ///
    /// Upstream failures always map to the fixed generic message; the
    /// underlying detail is never exposed
    pub fn client_message(&self) -> String {
        match self {
            AppError::MissingApiKey => MISSING_API_KEY_MESSAGE.to_string(),
            AppError::Validation(message) => message.clone(),
            AppError::Provider { status, .. } => format!("provider returned status {}", status),
            AppError::Upstream(_) => UPSTREAM_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Implement IntoResponse trait to allow errors to be returned directly as
/// HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            // Provider errors pass through verbatim so the caller sees
            // exactly what the provider said
            AppError::Provider { payload, .. } => {
                tracing::error!("Provider error: status {} - payload: {}", status, payload);
                (status, Json(payload)).into_response()
            }
            other => {
                if let AppError::Upstream(detail) = &other {
                    tracing::error!("Upstream failure: {} - Status code: {}", detail, status);
                } else {
                    tracing::warn!("Request error: {} - Status code: {}", other, status);
                }

                let body = ErrorResponse::new(other.client_message());
                (status, Json(body)).into_response()
            }
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;
