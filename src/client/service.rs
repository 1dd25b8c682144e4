//! Typed endpoint wrappers over a transport.

use super::transport::{Transport, extract_error_message};
use crate::config::PortalConfig;
use crate::error::{PortalClientError, Result};
use crate::models::{
    CompleteFamilyTree, Doctor, Lab, LabReport, Patient, TestResult, Visit,
};
use serde::de::DeserializeOwned;

/// Client for the portal REST API.
///
/// Each method issues a single GET and decodes the JSON response. There is
/// no retry, backoff or timeout; a failed call surfaces as one error.
#[derive(Debug)]
pub struct PortalClient<T: Transport> {
    transport: T,
    config: PortalConfig,
}

impl<T: Transport> PortalClient<T> {
    /// Create a client over a transport with the given configuration
    #[must_use]
    pub const fn new(transport: T, config: PortalConfig) -> Self {
        Self { transport, config }
    }

    /// The active configuration
    #[must_use]
    pub const fn config(&self) -> &PortalConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    async fn get_json<D: DeserializeOwned>(&self, path: &str) -> Result<D> {
        let url = self.url(path);
        log::debug!("GET {url}");

        let response = self.transport.get(&url).await?;
        if !response.is_success() {
            let message = extract_error_message(response.status, &response.body);
            log::warn!("GET {url} failed: {} {message}", response.status);
            return Err(PortalClientError::http(response.status, message));
        }

        Ok(serde_json::from_slice(&response.body)?)
    }

    /// Look up one patient
    pub async fn patient(&self, patient_id: i64) -> Result<Patient> {
        self.get_json(&format!("/patients/{patient_id}")).await
    }

    /// List visits of a patient
    pub async fn visits(&self, patient_id: i64) -> Result<Vec<Visit>> {
        self.get_json(&format!("/patients/{patient_id}/visits")).await
    }

    /// List lab reports of a patient (summaries, without test results)
    pub async fn lab_reports(&self, patient_id: i64) -> Result<Vec<LabReport>> {
        self.get_json(&format!("/patients/{patient_id}/lab-reports"))
            .await
    }

    /// Fetch one lab report with embedded test results
    pub async fn lab_report(&self, report_id: i64) -> Result<LabReport> {
        self.get_json(&format!("/lab-reports/{report_id}")).await
    }

    /// List test results of a lab report
    pub async fn test_results(&self, report_id: i64) -> Result<Vec<TestResult>> {
        self.get_json(&format!("/lab-reports/{report_id}/test-results"))
            .await
    }

    /// List all labs
    pub async fn labs(&self) -> Result<Vec<Lab>> {
        self.get_json("/labs").await
    }

    /// List all doctors
    pub async fn doctors(&self) -> Result<Vec<Doctor>> {
        self.get_json("/doctors").await
    }

    /// Fetch the pre-computed family disease history of a patient.
    ///
    /// Depth and language come from the configuration.
    pub async fn family_disease_history(&self, patient_id: i64) -> Result<CompleteFamilyTree> {
        self.get_json(&format!(
            "/patients/{patient_id}/family-disease-history?max_depth={}&lang={}",
            self.config.family_max_depth, self.config.language
        ))
        .await
    }
}
