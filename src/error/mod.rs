//! Error handling for the portal client.

use thiserror::Error;

/// Specialized error type for portal client operations
#[derive(Debug, Error)]
pub enum PortalClientError {
    /// Error reaching the backend (connection refused, DNS, aborted request)
    #[error("Network error: {0}")]
    Transport(String),
    /// Non-2xx response from the backend
    #[error("Request failed ({status}): {message}")]
    Http {
        /// HTTP status code returned by the backend
        status: u16,
        /// Message extracted from the response body, or the status text
        message: String,
    },
    /// Error decoding a JSON response body
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
    /// Error reading or writing local storage or export files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// A required input (e.g. a patient id taken from the route) was absent
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),
}

impl PortalClientError {
    /// Create a transport error from any displayable cause
    #[must_use]
    pub fn transport(cause: impl std::fmt::Display) -> Self {
        Self::Transport(cause.to_string())
    }

    /// Create an HTTP error for a status code and extracted message
    #[must_use]
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    /// Create a missing-parameter error
    #[must_use]
    pub fn missing_parameter(name: impl Into<String>) -> Self {
        Self::MissingParameter(name.into())
    }

    /// Human-readable text for the dismissible error banner.
    ///
    /// Every failure surfaces to the user as free text; nothing is fatal.
    #[must_use]
    pub fn banner_message(&self) -> String {
        self.to_string()
    }
}

/// Result type for portal client operations
pub type Result<T> = std::result::Result<T, PortalClientError>;
