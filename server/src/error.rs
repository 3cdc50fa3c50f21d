//! Error types for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use errors::StoreError;
use serde::Serialize;
use thiserror::Error;

/// Result type alias for API handlers.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Body returned when the capture secret is missing or wrong.
pub const UNAUTHORIZED_MESSAGE: &str = "Mot de passe incorrect";

/// Body returned for failures whose details stay server-side.
pub const INTERNAL_MESSAGE: &str = "Erreur serveur";

/// Errors surfaced by the JSON endpoints.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Authorization header missing or not the expected bearer secret.
    #[error("Mot de passe incorrect")]
    Unauthorized,

    /// The store rejected or failed the operation. Its message is forwarded.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Anything else: malformed body, panics, unexpected conditions.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body: `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Unauthorized => (StatusCode::UNAUTHORIZED, UNAUTHORIZED_MESSAGE.to_string()),
            Self::Store(e) => {
                tracing::error!(error = %e, "Store error");
                (StatusCode::INTERNAL_SERVER_ERROR, e.store_message())
            }
            Self::Internal(detail) => {
                tracing::error!(detail = %detail, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Response for a handler that panicked. Used by the catch-panic layer.
pub fn panic_response(_panic: Box<dyn std::any::Any + Send + 'static>) -> Response {
    ApiError::Internal("handler panicked".to_string()).into_response()
}
