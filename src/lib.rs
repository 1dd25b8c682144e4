//! A Rust client library for a multi-role healthcare records portal:
//! typed wire models, role-gated routing, session management, and the
//! family disease history aggregation, filtering and export pipeline.

pub mod access;
pub mod client;
pub mod config;
pub mod error;
pub mod history;
pub mod models;
pub mod session;
pub mod views;

// Re-export the most common types for easier use
// Core types
pub use config::PortalConfig;
pub use error::{PortalClientError, Result};

// Fetch layer
pub use client::{MockTransport, PortalClient, RawResponse, Transport};

// Family disease history
pub use history::{
    DiseaseCategory, DiseaseStatistics, FamilyTreeExport, FamilyTreeView, HealthStatusFilter,
    HistoryQuery, SortKey,
};

// Models
pub use models::{CompleteFamilyTree, Diagnosis, FamilyMember, Role, User};

// Session and routing
pub use access::{Navigation, RouteTable};
pub use session::{FileStorage, MemoryStorage, Session, SessionState, SessionStorage};

// Page loaders
pub use views::{DirectoryView, LabReportDetail, PatientDashboard, ViewScope};
