//! Lab report and test result models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A lab report issued for a patient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabReport {
    /// Unique report identifier
    pub report_id: i64,
    /// Patient the report belongs to
    pub patient_id: i64,
    /// Name of the issuing lab
    #[serde(default)]
    pub lab_name: Option<String>,
    /// Date the report was issued
    #[serde(default)]
    pub report_date: Option<NaiveDate>,
    /// Report status string as the backend reports it
    #[serde(default)]
    pub status: Option<String>,
    /// Embedded test results; empty in listing responses, populated by
    /// the detail endpoint
    #[serde(default)]
    pub test_results: Vec<TestResult>,
}

impl LabReport {
    /// Number of results the backend flagged as outside the reference range
    #[must_use]
    pub fn abnormal_count(&self) -> usize {
        self.test_results.iter().filter(|r| r.is_abnormal).count()
    }
}

/// One measured value inside a lab report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    /// Name of the test
    pub test_name: String,
    /// Measured value
    #[serde(default)]
    pub value: Option<f64>,
    /// Unit of the measured value
    #[serde(default)]
    pub unit: Option<String>,
    /// Lower bound of the reference range
    #[serde(default)]
    pub reference_min: Option<f64>,
    /// Upper bound of the reference range
    #[serde(default)]
    pub reference_max: Option<f64>,
    /// Backend flag for values outside the reference range
    #[serde(default)]
    pub is_abnormal: bool,
}
