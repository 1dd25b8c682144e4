//! Visit entity model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One recorded visit of a patient to a doctor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visit {
    /// Unique visit identifier
    pub visit_id: i64,
    /// Patient the visit belongs to
    pub patient_id: i64,
    /// Name of the attending doctor
    #[serde(default)]
    pub doctor_name: Option<String>,
    /// Date of the visit
    #[serde(default)]
    pub visit_date: Option<NaiveDate>,
    /// Reason for the visit
    #[serde(default)]
    pub reason: Option<String>,
    /// Free-text notes
    #[serde(default)]
    pub notes: Option<String>,
}
