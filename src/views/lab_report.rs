//! Lab report detail page data.

use crate::client::{PortalClient, Transport};
use crate::error::Result;
use crate::models::{LabReport, TestResult};
use futures::future::try_join;

/// Data backing the lab report detail page: the report plus its results,
/// fetched concurrently and committed together
#[derive(Debug, Clone, PartialEq)]
pub struct LabReportDetail {
    /// The report record
    pub report: LabReport,
    /// The report's individual test results
    pub results: Vec<TestResult>,
}

impl LabReportDetail {
    /// Load one report and its test results; both fetches must succeed.
    pub async fn load<T: Transport>(client: &PortalClient<T>, report_id: i64) -> Result<Self> {
        let (report, results) =
            try_join(client.lab_report(report_id), client.test_results(report_id)).await?;

        Ok(Self { report, results })
    }

    /// Results the backend flagged as outside the reference range
    #[must_use]
    pub fn abnormal_results(&self) -> Vec<&TestResult> {
        self.results.iter().filter(|r| r.is_abnormal).collect()
    }
}
