//! Patient dashboard page data.
//!
//! The dashboard stitches three endpoints in one load: the patient
//! record, their visits and their lab reports. The fetches run
//! concurrently with no ordering guarantee; state is committed only when
//! all of them succeed.

use crate::client::{PortalClient, Transport};
use crate::error::Result;
use crate::models::{LabReport, Patient, Visit};
use futures::future::try_join3;

/// Data backing the patient dashboard page
#[derive(Debug, Clone, PartialEq)]
pub struct PatientDashboard {
    /// The patient's demographic record
    pub patient: Patient,
    /// All visits on record
    pub visits: Vec<Visit>,
    /// All lab reports on record (summaries)
    pub lab_reports: Vec<LabReport>,
}

impl PatientDashboard {
    /// Load the dashboard for a patient.
    ///
    /// All three fetches must succeed; the first failure is returned and
    /// nothing partial is kept.
    pub async fn load<T: Transport>(
        client: &PortalClient<T>,
        patient_id: i64,
    ) -> Result<Self> {
        let (patient, visits, lab_reports) = try_join3(
            client.patient(patient_id),
            client.visits(patient_id),
            client.lab_reports(patient_id),
        )
        .await?;

        log::info!(
            "Loaded dashboard for {} ({} visits, {} lab reports)",
            patient.name,
            visits.len(),
            lab_reports.len()
        );

        Ok(Self {
            patient,
            visits,
            lab_reports,
        })
    }

    /// The most recent `limit` visits, newest first. Visits without a
    /// date sort last.
    #[must_use]
    pub fn recent_visits(&self, limit: usize) -> Vec<&Visit> {
        let mut visits: Vec<&Visit> = self.visits.iter().collect();
        visits.sort_by(|a, b| b.visit_date.cmp(&a.visit_date));
        visits.truncate(limit);
        visits
    }

    /// Total number of backend-flagged abnormal results across all
    /// loaded reports
    #[must_use]
    pub fn abnormal_result_count(&self) -> usize {
        self.lab_reports.iter().map(LabReport::abnormal_count).sum()
    }
}
