//! Error types for legalai-server
//!
//! Every failure is converted to `{"error": "<message>", "code": "<CODE>"}`
//! at the route boundary. Validation problems are 400; everything else,
//! including a missing API key, is 500. Nothing is retried.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use legalai_common::api::ErrorResponse;
use thiserror::Error;
use tracing::error;

use crate::gateway::GatewayError;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invalid request (400)
    #[error("{0}")]
    BadRequest(String),

    /// Model gateway failure (400 or 500 depending on the cause)
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Unreadable request bodies (bad JSON, wrong content type, wrong field
/// types) are validation errors like any other
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl ApiError {
    /// HTTP status and stable error code for this error
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ApiError::Gateway(err) => match err {
                GatewayError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
                GatewayError::Configuration => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "CONFIGURATION_ERROR")
                }
                GatewayError::Upstream { .. } => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "UPSTREAM_ERROR")
                }
                GatewayError::EmptyResponse => (StatusCode::INTERNAL_SERVER_ERROR, "EMPTY_RESPONSE"),
                GatewayError::Parse(_) => (StatusCode::INTERNAL_SERVER_ERROR, "PARSE_ERROR"),
                GatewayError::Network(_) => (StatusCode::INTERNAL_SERVER_ERROR, "NETWORK_ERROR"),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let message = self.to_string();

        if status.is_server_error() {
            error!(code, "{}", message);
        }

        let body = Json(ErrorResponse {
            error: message,
            code: code.to_string(),
        });

        (status, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
