//! Page-level data loaders.
//!
//! Each page owns its own fetched data copy and re-fetches on mount;
//! there is no shared cache or request de-duplication. Pages that stitch
//! several endpoints commit state only when every fetch succeeds.

pub mod dashboard;
pub mod directory;
pub mod lab_report;
pub mod scope;

pub use dashboard::PatientDashboard;
pub use directory::DirectoryView;
pub use lab_report::LabReportDetail;
pub use scope::ViewScope;
