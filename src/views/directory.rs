//! Admin directory page data.

use crate::client::{PortalClient, Transport};
use crate::error::Result;
use crate::models::{Doctor, Lab};
use futures::future::try_join;

/// Data backing the admin directory page: all labs and doctors, fetched
/// concurrently and committed together
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryView {
    /// All registered labs
    pub labs: Vec<Lab>,
    /// All registered doctors
    pub doctors: Vec<Doctor>,
}

impl DirectoryView {
    /// Load the directory; both fetches must succeed.
    pub async fn load<T: Transport>(client: &PortalClient<T>) -> Result<Self> {
        let (labs, doctors) = try_join(client.labs(), client.doctors()).await?;
        Ok(Self { labs, doctors })
    }
}
