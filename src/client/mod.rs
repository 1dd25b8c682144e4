//! REST fetch layer: transport seam, typed endpoint wrappers and a canned
//! transport for tests and offline use.

pub mod mock;
pub mod service;
pub mod transport;

pub use mock::MockTransport;
pub use service::PortalClient;
pub use transport::{RawResponse, Transport, extract_error_message, status_text};
