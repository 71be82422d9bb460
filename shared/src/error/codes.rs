//! Error codes for the staff directory service
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 9xxx: System errors

use std::fmt;

/// Unified error code enum
///
/// Codes are `u16` so they can be logged and compared cheaply. The wire
/// format only carries the message (see [`ErrorCode::message`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Entity violates a store constraint (foreign key, not-null, check)
    ValidationFailed = 2,
    /// No row for the given id
    NotFound = 3,
    /// Malformed JSON body or path parameter
    InvalidRequest = 5,

    // ==================== 9xxx: System ====================
    /// Unclassified database error
    DatabaseError = 9002,
    /// Connection or pool failure, the store cannot be reached
    StoreUnavailable = 9003,
    /// Serializable transaction aborted by a concurrent writer
    TransactionConflict = 9004,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Client-facing message written into the `msg` field
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::ValidationFailed => "bad request",
            ErrorCode::NotFound => "not found",
            ErrorCode::InvalidRequest => "bad request",
            ErrorCode::DatabaseError => "internal server error",
            ErrorCode::StoreUnavailable => "service unavailable",
            ErrorCode::TransactionConflict => "conflict",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
