//! Diagnosis entity model
//!
//! This module contains the Diagnosis model embedded in family history
//! responses. Diagnoses carry a machine-learning confidence score and are
//! used for category classification and derived statistics.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A diagnosis attached to a family member, as produced by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnosis {
    /// Raw disease name (backend-normalized, may contain underscores)
    pub disease_name: String,
    /// Progression stage, when assessed
    #[serde(default)]
    pub progression_stage: Option<String>,
    /// Date the assessment was made
    #[serde(default)]
    pub assessed_date: Option<NaiveDate>,
    /// Free-text clinician notes
    #[serde(default)]
    pub notes: Option<String>,
    /// Model confidence in the 0..1 range
    pub confidence_score: f64,
    /// Identifier of the model that produced the assessment
    #[serde(default)]
    pub ml_model_used: Option<String>,
}

impl Diagnosis {
    /// Create a diagnosis with the minimum required fields
    #[must_use]
    pub fn new(disease_name: impl Into<String>, confidence_score: f64) -> Self {
        Self {
            disease_name: disease_name.into(),
            progression_stage: None,
            assessed_date: None,
            notes: None,
            confidence_score,
            ml_model_used: None,
        }
    }

    /// Set the progression stage
    #[must_use]
    pub fn with_stage(mut self, stage: impl Into<String>) -> Self {
        self.progression_stage = Some(stage.into());
        self
    }

    /// Set the assessment date
    #[must_use]
    pub const fn with_assessed_date(mut self, date: NaiveDate) -> Self {
        self.assessed_date = Some(date);
        self
    }

    /// Confidence score rendered as a whole percentage (0..100)
    #[must_use]
    pub fn confidence_percent(&self) -> u32 {
        (self.confidence_score.clamp(0.0, 1.0) * 100.0).round() as u32
    }
}
