//! Unified error system for the staff directory service
//!
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Error type carrying a code and a client-facing message
//! - [`MessageResponse`]: The `{"msg": "..."}` envelope written on failure
//!   (and on message-only successes)
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors (request decoding, validation, lookups)
//! - 9xxx: System errors (store, transactions)
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::NotFound);
//! assert_eq!(err.message, "not found");
//! assert_eq!(err.http_status().as_u16(), 404);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::ErrorCode;
pub use types::{AppError, AppResult, MessageResponse};
