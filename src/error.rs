//! Gateway error types with HTTP status code mapping.
//!
//! [`GatewayError`] is the central error type for the gateway. Each variant
//! maps to an HTTP status code and a JSON `{"error": ...}` response body.
//! Validation failures carry their detail through to the caller; persistence
//! and channel failures are logged server-side and reported with a fixed,
//! non-leaking message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// { "error": "name must not be empty" }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

/// Server-side error enum covering the three failure classes of an
/// ingestion request.
///
/// All three are terminal for the current request; nothing is retried
/// internally.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Request payload was malformed or failed validation. Recoverable by
    /// caller correction; the detail is returned to the caller.
    #[error("invalid request: {0}")]
    Validation(String),

    /// Entity store unavailable or write/read rejected. Opaque to the
    /// caller.
    #[error("persistence error: {0}")]
    Persistence(String),

    /// Notification channel unavailable or publish rejected. Opaque to the
    /// caller.
    #[error("channel error: {0}")]
    Channel(String),
}

impl GatewayError {
    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Persistence(_) | Self::Channel(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the message exposed to the caller.
    ///
    /// Validation detail passes through verbatim; the other classes map to
    /// fixed messages so that store and broker internals never leak.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::Validation(detail) => detail.clone(),
            Self::Persistence(_) => "failed to access entity store".to_string(),
            Self::Channel(_) => "failed to publish notification".to_string(),
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = ErrorResponse {
            error: self.public_message(),
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_detail_is_exposed() {
        let err = GatewayError::Validation("name must not be empty".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), "name must not be empty");
    }

    #[test]
    fn persistence_detail_is_not_leaked() {
        let err = GatewayError::Persistence("connection refused (db:5432)".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "failed to access entity store");
    }

    #[test]
    fn channel_detail_is_not_leaked() {
        let err = GatewayError::Channel("broker unreachable".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "failed to publish notification");
    }
}
