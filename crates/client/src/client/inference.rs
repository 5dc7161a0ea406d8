//! Prompt refinement and image generation.

use super::CaseforgeClient;
use crate::error::Result;
use caseforge_core::inference::{ImageResponse, PromptRequest, RefinedPrompt};

impl CaseforgeClient {
    /// Refine a prompt through the text model.
    pub async fn refine_prompt(&self, request: &PromptRequest) -> Result<RefinedPrompt> {
        request.validate()?;
        let response = self
            .client
            .post(self.url("/refine-prompt"))
            .json(request)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Generate images and return their public URLs.
    pub async fn generate_image(&self, request: &PromptRequest) -> Result<ImageResponse> {
        request.validate()?;
        let response = self
            .client
            .post(self.url("/generate-image"))
            .json(request)
            .send()
            .await?;
        self.handle_response(response).await
    }
}
