//! Image table operations.

use super::CaseforgeClient;
use crate::error::Result;
use caseforge_core::image::{
    DeleteFavoriteRequest, DeleteFavoriteResponse, ImageRecord, SaveFavoriteRequest,
};

impl CaseforgeClient {
    /// List all stored images, newest first.
    pub async fn list_images(&self) -> Result<Vec<ImageRecord>> {
        let response = self.client.get(self.url("/api/images")).send().await?;
        self.handle_response(response).await
    }

    /// Save an image URL, optionally with an explicit description.
    pub async fn save_favorite(
        &self,
        image_url: &str,
        description: Option<String>,
    ) -> Result<ImageRecord> {
        let request = SaveFavoriteRequest {
            image_url: image_url.to_string(),
            description,
        };
        request.validate()?;
        let response = self
            .client
            .post(self.url("/api/save_favorite"))
            .json(&request)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Delete every row stored under the URL.
    pub async fn delete_favorite(&self, image_url: &str) -> Result<DeleteFavoriteResponse> {
        let request = DeleteFavoriteRequest {
            image_url: image_url.to_string(),
        };
        request.validate()?;
        let response = self
            .client
            .post(self.url("/api/delete_favorite"))
            .json(&request)
            .send()
            .await?;
        self.handle_response(response).await
    }
}
