//! Family disease history aggregation.
//!
//! The portal's core presentation logic: category classification, the
//! search/filter/sort pipeline, derived disease statistics, the stateful
//! tree view with auto-expand and memoized filtering, and JSON export.

pub mod category;
pub mod export;
pub mod filter;
pub mod stats;
pub mod view;

pub use category::DiseaseCategory;
pub use export::FamilyTreeExport;
pub use filter::{HealthStatusFilter, HistoryQuery, SortKey};
pub use stats::{DiseaseStatistics, normalize_disease_name};
pub use view::{FamilyTreeView, MAX_ZOOM_PERCENT, MIN_ZOOM_PERCENT};
