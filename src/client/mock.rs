//! Canned transport for tests and offline demos.

use super::transport::{RawResponse, Transport};
use crate::error::{PortalClientError, Result};
use rustc_hash::{FxHashMap, FxHashSet};

/// A transport serving pre-registered responses keyed by full URL.
///
/// Unregistered URLs answer 404; URLs registered as failing simulate a
/// network error instead of an HTTP response.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: FxHashMap<String, RawResponse>,
    failing: FxHashSet<String>,
}

impl MockTransport {
    /// Create an empty mock transport
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a 200 response with a JSON body for a URL
    pub fn with_json(mut self, url: impl Into<String>, value: &impl serde::Serialize) -> Result<Self> {
        self.responses.insert(url.into(), RawResponse::json(value)?);
        Ok(self)
    }

    /// Register an arbitrary response for a URL
    #[must_use]
    pub fn with_response(mut self, url: impl Into<String>, response: RawResponse) -> Self {
        self.responses.insert(url.into(), response);
        self
    }

    /// Register a URL that fails at the network level
    #[must_use]
    pub fn with_network_failure(mut self, url: impl Into<String>) -> Self {
        self.failing.insert(url.into());
        self
    }
}

impl Transport for MockTransport {
    async fn get(&self, url: &str) -> Result<RawResponse> {
        if self.failing.contains(url) {
            return Err(PortalClientError::transport("connection refused"));
        }

        Ok(self
            .responses
            .get(url)
            .cloned()
            .unwrap_or_else(|| RawResponse::new(404, Vec::new())))
    }
}
