//! Feedback operations.

use super::CaseforgeClient;
use crate::error::Result;
use caseforge_core::feedback::{FeedbackRecord, FeedbackRequest, StatusResponse};

impl CaseforgeClient {
    /// Submit feedback for an image.
    pub async fn submit_feedback(&self, request: &FeedbackRequest) -> Result<StatusResponse> {
        request.validate()?;
        let response = self
            .client
            .post(self.url("/submit-feedback"))
            .json(request)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// List feedback recorded for an image URL, oldest first.
    pub async fn list_feedback(&self, image_url: &str) -> Result<Vec<FeedbackRecord>> {
        let response = self
            .client
            .get(self.url("/feedback"))
            .query(&[("image_url", image_url)])
            .send()
            .await?;
        self.handle_response(response).await
    }
}
