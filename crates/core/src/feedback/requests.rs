use serde::{Deserialize, Serialize};

use crate::validation::{require_field, ValidationError};

use super::types::FeedbackRecord;

/// Body of `POST /submit-feedback`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackRequest {
    pub image_url: String,
    pub rating: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

impl FeedbackRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_field("image_url", &self.image_url)
    }

    pub fn into_record(self) -> FeedbackRecord {
        FeedbackRecord {
            tags: self.tags,
            comments: self.comments,
            ..FeedbackRecord::new(self.image_url, self.rating)
        }
    }
}

/// Query string of `GET /feedback`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackQuery {
    pub image_url: String,
}

impl FeedbackQuery {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_field("image_url", &self.image_url)
    }
}

/// Plain acknowledgement body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
}

impl StatusResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
        }
    }
}
