//! Type-safe error codes for API responses.
//!
//! Each error code carries:
//! - a string identifier for clients (e.g., "INVALID_QUERY")
//! - an integer code for logs and monitoring (e.g., 1002)
//! - a default human-readable message
//!
//! # Example
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::InvalidQuery;
//! assert_eq!(code.as_str(), "INVALID_QUERY");
//! assert_eq!(code.code(), 1002);
//! assert_eq!(code.default_message(), "Invalid query parameters");
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Request failed a business validation rule
    ValidationError,

    /// Query string is missing a required parameter or could not be parsed
    InvalidQuery,

    /// Requested resource was not found
    NotFound,

    /// An unexpected internal server error occurred
    InternalError,

    /// HTTP method is not supported on this route
    MethodNotAllowed,
}

impl ErrorCode {
    /// SCREAMING_SNAKE_CASE identifier clients can match on.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidQuery => "INVALID_QUERY",
            Self::NotFound => "NOT_FOUND",
            Self::InternalError => "INTERNAL_ERROR",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
        }
    }

    /// Integer code used in structured logs and metrics.
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidQuery => 1002,
            Self::NotFound => 1004,
            Self::InternalError => 1005,
            Self::MethodNotAllowed => 1006,
        }
    }

    /// Default user-facing message. Handlers may override it with specifics.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::InvalidQuery => "Invalid query parameters",
            Self::NotFound => "Resource not found",
            Self::InternalError => "An internal server error occurred",
            Self::MethodNotAllowed => "The HTTP method is not allowed for this resource",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ErrorCode; 5] = [
        ErrorCode::ValidationError,
        ErrorCode::InvalidQuery,
        ErrorCode::NotFound,
        ErrorCode::InternalError,
        ErrorCode::MethodNotAllowed,
    ];

    #[test]
    fn test_error_code_string_representation() {
        assert_eq!(ErrorCode::InvalidQuery.as_str(), "INVALID_QUERY");
        assert_eq!(ErrorCode::NotFound.as_str(), "NOT_FOUND");
        assert_eq!(ErrorCode::MethodNotAllowed.as_str(), "METHOD_NOT_ALLOWED");
    }

    #[test]
    fn test_error_code_integer_codes() {
        assert_eq!(ErrorCode::ValidationError.code(), 1001);
        assert_eq!(ErrorCode::InternalError.code(), 1005);
        assert_eq!(ErrorCode::MethodNotAllowed.code(), 1006);
    }

    #[test]
    fn test_error_codes_are_unique() {
        let codes: std::collections::HashSet<i32> = ALL.iter().map(|c| c.code()).collect();
        assert_eq!(codes.len(), ALL.len());
    }

    #[test]
    fn test_serde_name_matches_as_str() {
        for code in ALL {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code.as_str()));
        }

        let code: ErrorCode = serde_json::from_str("\"INVALID_QUERY\"").unwrap();
        assert_eq!(code, ErrorCode::InvalidQuery);
        assert_eq!(code.to_string(), "INVALID_QUERY");
    }
}
