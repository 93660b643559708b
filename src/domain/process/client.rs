//! Processes sub-client.

use crate::client::UnblockClient;
use crate::domain::process::wire::ProcessResponse;
use crate::domain::process::{ProcessDirection, ProcessStatus};
use crate::error::SdkError;
use crate::http::{path_segment, AuthMode};

pub struct Processes<'a> {
    pub(crate) client: &'a UnblockClient,
}

impl<'a> Processes<'a> {
    pub async fn onramp_status(&self, process_id: &str) -> Result<ProcessStatus, SdkError> {
        self.status(ProcessDirection::Onramp, process_id).await
    }

    pub async fn offramp_status(&self, process_id: &str) -> Result<ProcessStatus, SdkError> {
        self.status(ProcessDirection::Offramp, process_id).await
    }

    async fn status(
        &self,
        direction: ProcessDirection,
        process_id: &str,
    ) -> Result<ProcessStatus, SdkError> {
        let path = format!("/process/{}/{}", direction.as_str(), path_segment(process_id));
        let resp: ProcessResponse = self.client.http.get(&path, AuthMode::Session).await?;
        Ok(ProcessStatus::from_wire(direction, resp))
    }
}
