use serde::{Deserialize, Serialize};

use crate::validation::{require_field, ValidationError};

/// Body of `POST /refine-prompt` and `POST /generate-image`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptRequest {
    pub product_type: String,
    pub prompt: String,
}

impl PromptRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_field("product_type", &self.product_type)?;
        require_field("prompt", &self.prompt)
    }
}

/// Result of a prompt refinement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefinedPrompt {
    pub original_prompt: String,
    pub refined_prompt: String,
    pub keywords: Vec<String>,
}

/// Public URLs of freshly generated images.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageResponse {
    pub image_urls: Vec<String>,
}
