//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,

            // The caller may resubmit
            Self::TransactionConflict => StatusCode::CONFLICT,

            Self::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,

            Self::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,

            Self::ValidationFailed | Self::InvalidRequest => StatusCode::BAD_REQUEST,
        }
    }
}
