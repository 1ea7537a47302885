//! Error types for TextIT API operations

use thiserror::Error;

/// Errors surfaced by the TextIT client.
///
/// Failures are never retried internally; every one of them reaches the
/// caller as a distinct variant so callers can branch on the kind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TextitError {
    /// Input rejected locally, before any network call
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// What was wrong with the input
        message: String,
    },

    /// Connection-level failure from the transport
    #[error("Network error: {message}")]
    NetworkError {
        /// Transport description of the failure
        message: String,
    },

    /// Non-success HTTP status from the API server
    #[error("HTTP error: {status} - {body}")]
    HttpError {
        /// Status code returned by the server
        status: u16,
        /// Raw response body, kept for caller inspection
        body: String,
    },

    /// Error envelope returned by the service itself
    #[error("API error: {message} [{status}]")]
    ApiError {
        /// Service-defined error status
        status: u16,
        /// Service-defined error message
        message: String,
    },

    /// Malformed or incomplete JSON response
    #[error("Invalid response: {message}")]
    ParseError {
        /// What was missing or malformed
        message: String,
    },

    /// Invalid client configuration
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Which setting was rejected
        message: String,
    },
}

impl TextitError {
    /// Shorthand for an [`TextitError::InvalidArgument`] value.
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        TextitError::InvalidArgument {
            message: message.into(),
        }
    }

    /// Shorthand for a [`TextitError::ParseError`] value.
    pub(crate) fn parse(message: impl Into<String>) -> Self {
        TextitError::ParseError {
            message: message.into(),
        }
    }
}

/// Result type for TextIT client operations
pub type Result<T> = std::result::Result<T, TextitError>;
