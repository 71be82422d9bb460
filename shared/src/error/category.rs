//! Error category classification

use super::codes::ErrorCode;

/// Error category classification based on error code ranges
///
/// - 0xxx: General errors, caused by the request
/// - 9xxx: System errors, caused by the store or the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..9000 => Self::General,
            _ => Self::System,
        }
    }
}

impl ErrorCode {
    /// Get the category of this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(5), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::NotFound.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::StoreUnavailable.category(), ErrorCategory::System);
        assert_eq!(ErrorCode::DatabaseError.category(), ErrorCategory::System);
    }
}
