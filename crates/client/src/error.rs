//! Unified error handling for the client.
//!
//! Every API module returns the same [`ApiError`] shape, so callers always
//! have one type to inspect. No module logs-and-swallows a failure: actions
//! like restrict/unrestrict surface their result like everything else.

use thiserror::Error;

/// Errors that can occur when interacting with the marketplace backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned an error status with a message body.
    #[error("Backend error: {status} - {message}")]
    Backend {
        /// HTTP status code.
        status: u16,
        /// Message from the backend's `{ "message": ... }` body, or the raw
        /// body text when no message field is present.
        message: String,
    },

    /// Authentication/authorization failed (401/403).
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rate limited by the backend.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Failed to parse a response body.
    #[error("Parse error: {0}")]
    Parse(String),

    /// An authenticated call was attempted without a session token.
    #[error("No session token - log in first")]
    NoSessionToken,

    /// Client-side validation rejected the input before any network call.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// A client-side validation failure for a single field.
///
/// Form validation is sequential: the first violated rule is returned and no
/// further rules run.
#[derive(Debug, Clone, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// The offending field, dotted for nested sections (e.g.
    /// `vendorInfo.shopName`).
    pub field: &'static str,
    /// Human-readable description of the violation.
    pub message: String,
}

impl ValidationError {
    /// Create a new validation error for `field`.
    #[must_use]
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = ApiError::NotFound("/order/abc".to_owned());
        assert_eq!(err.to_string(), "Not found: /order/abc");

        let err = ApiError::Backend {
            status: 422,
            message: "discount out of range".to_owned(),
        };
        assert_eq!(err.to_string(), "Backend error: 422 - discount out of range");
    }

    #[test]
    fn test_rate_limited_display() {
        let err = ApiError::RateLimited(60);
        assert_eq!(err.to_string(), "Rate limited, retry after 60 seconds");
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new("email", "must contain an @ symbol");
        assert_eq!(err.to_string(), "email: must contain an @ symbol");

        let wrapped = ApiError::from(err);
        assert_eq!(
            wrapped.to_string(),
            "Validation error: email: must contain an @ symbol"
        );
    }
}
