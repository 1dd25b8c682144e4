//! Patient and provider directory models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Demographic record for one patient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    /// Unique patient identifier
    pub patient_id: i64,
    /// Display name
    pub name: String,
    /// Date of birth, when known
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    /// Gender string as the backend reports it
    #[serde(default)]
    pub gender: Option<String>,
    /// Contact phone number
    #[serde(default)]
    pub phone: Option<String>,
    /// Contact email
    #[serde(default)]
    pub email: Option<String>,
    /// Postal address
    #[serde(default)]
    pub address: Option<String>,
}

/// Directory entry for a doctor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    /// Unique doctor identifier
    pub doctor_id: i64,
    /// Display name
    pub name: String,
    /// Medical specialization, when listed
    #[serde(default)]
    pub specialization: Option<String>,
}

/// Directory entry for a lab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lab {
    /// Unique lab identifier
    pub lab_id: i64,
    /// Display name
    pub name: String,
    /// Location or address, when listed
    #[serde(default)]
    pub location: Option<String>,
}
