//! Family member entity model
//!
//! This module contains the FamilyMember model, one row of the family
//! disease history response. Members arrive pre-computed from the backend;
//! the client only filters and sorts copies of them.

use super::diagnosis::Diagnosis;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Blood relation of a family member to the root patient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelationshipType {
    /// Mother or father
    Parent,
    /// Son or daughter
    Child,
    /// Brother or sister
    Sibling,
    /// Spouse (not a blood relative; included for household context)
    Spouse,
    /// Grandmother or grandfather
    Grandparent,
    /// Great-grandmother or great-grandfather
    GreatGrandparent,
    /// Any relation the backend does not map to a known type
    #[serde(other)]
    Other,
}

impl RelationshipType {
    /// Display label for the relationship
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Parent => "parent",
            Self::Child => "child",
            Self::Sibling => "sibling",
            Self::Spouse => "spouse",
            Self::Grandparent => "grandparent",
            Self::GreatGrandparent => "great-grandparent",
            Self::Other => "other",
        }
    }
}

impl From<&str> for RelationshipType {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "parent" => Self::Parent,
            "child" => Self::Child,
            "sibling" => Self::Sibling,
            "spouse" => Self::Spouse,
            "grandparent" => Self::Grandparent,
            "great-grandparent" | "great_grandparent" => Self::GreatGrandparent,
            _ => Self::Other,
        }
    }
}

/// Gender as reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// Unspecified or any other value
    #[serde(other)]
    Other,
}

/// A blood relative of the root patient with embedded diagnoses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyMember {
    /// Patient identifier of the relative
    pub patient_id: i64,
    /// Display name
    pub name: String,
    /// Relation to the root patient
    pub relationship_type: RelationshipType,
    /// Gender
    pub gender: Gender,
    /// Date of birth, when known
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    /// Generation distance from the root patient (0 = self)
    pub depth: u32,
    /// Number of diseases on record for this member
    pub total_diseases: u32,
    /// Raw disease names, one per disease on record
    #[serde(default)]
    pub disease_names: Vec<String>,
    /// Full diagnoses with confidence scores
    #[serde(default)]
    pub diagnoses: Vec<Diagnosis>,
}

impl FamilyMember {
    /// Whether this member has at least one disease on record
    #[must_use]
    pub const fn has_diseases(&self) -> bool {
        self.total_diseases > 0
    }

    /// Whether this member is the root patient
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.depth == 0
    }

    /// Mean diagnosis confidence for this member, if any diagnoses exist
    #[must_use]
    pub fn average_confidence(&self) -> Option<f64> {
        if self.diagnoses.is_empty() {
            return None;
        }

        let total: f64 = self.diagnoses.iter().map(|d| d.confidence_score).sum();
        Some(total / self.diagnoses.len() as f64)
    }
}
