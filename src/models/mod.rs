//! Typed models for every JSON payload the portal backend serves.
//!
//! All models are produced wholesale by the backend; the client never
//! mutates fetched values, only filters and sorts copies. Optional wire
//! fields are explicit `Option` fields with serde defaults.

pub mod diagnosis;
pub mod lab;
pub mod member;
pub mod patient;
pub mod tree;
pub mod user;
pub mod visit;

pub use diagnosis::Diagnosis;
pub use lab::{LabReport, TestResult};
pub use member::{FamilyMember, Gender, RelationshipType};
pub use patient::{Doctor, Lab, Patient};
pub use tree::CompleteFamilyTree;
pub use user::{Role, User};
pub use visit::Visit;
