//! Error types and the message envelope

use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application error with a structured error code
///
/// `message` is what the client sees in the `msg` field. Detailed causes
/// are logged where the error is produced, never sent on the wire.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Client-facing message
    pub message: String,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
        }
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Malformed body or path parameter
    pub fn bad_request() -> Self {
        Self::new(ErrorCode::InvalidRequest)
    }

    /// Entity rejected by a store constraint
    pub fn validation() -> Self {
        Self::new(ErrorCode::ValidationFailed)
    }
}

/// `{"msg": "..."}` body used for errors and message-only successes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

impl From<&AppError> for MessageResponse {
    fn from(err: &AppError) -> Self {
        Self::new(err.message.clone())
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();
        let body = MessageResponse::from(&self);

        // Log system errors
        if matches!(self.code.category(), super::category::ErrorCategory::System) {
            tracing::error!(
                code = %self.code,
                message = %self.message,
                "System error occurred"
            );
        }

        (status, Json(body)).into_response()
    }
}
