//! Transport seam between the client and a concrete HTTP stack.
//!
//! The portal client never embeds an HTTP implementation; callers inject
//! anything that can GET a URL and hand back status plus body bytes.

use crate::error::Result;

/// A raw response from the backend before decoding
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body bytes
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Create a response from a status and body
    #[must_use]
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Create a 200 response carrying a JSON-serialized value
    pub fn json(value: &impl serde::Serialize) -> Result<Self> {
        Ok(Self::new(200, serde_json::to_vec(value)?))
    }

    /// Whether the status is in the 2xx range
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Asynchronous GET access to the backend.
///
/// Implementations must not retry or add timeouts; failure semantics are
/// handled uniformly by the client on top of this trait.
pub trait Transport: Send + Sync {
    /// Issue a GET for an absolute URL
    fn get(&self, url: &str) -> impl std::future::Future<Output = Result<RawResponse>> + Send;
}

/// Extract a display-ready message from an error response.
///
/// Prefers a `message` or `detail` string in a JSON body; falls back to
/// the HTTP status text.
#[must_use]
pub fn extract_error_message(status: u16, body: &[u8]) -> String {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(body) {
        for key in ["message", "detail"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                return text.to_string();
            }
        }
    }

    status_text(status).to_string()
}

/// Canonical reason phrase for the statuses the backend is known to return
#[must_use]
pub const fn status_text(status: u16) -> &'static str {
    match status {
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        409 => "Conflict",
        422 => "Unprocessable Entity",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        _ => "Request failed",
    }
}
