use serde::{Deserialize, Serialize};

use crate::validation::{require_field, ValidationError};

use super::naming::label_from_key;
use super::types::NewImage;

/// Body of `POST /api/save_favorite`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveFavoriteRequest {
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SaveFavoriteRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_field("image_url", &self.image_url)
    }

    /// Converts the request into an image, labelling it from the URL when no
    /// description was sent.
    pub fn into_new_image(self) -> NewImage {
        let description = match self.description {
            Some(description) if !description.trim().is_empty() => description,
            _ => label_from_key(&self.image_url),
        };
        NewImage::new(self.image_url, description)
    }
}

/// Body of `POST /api/delete_favorite`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteFavoriteRequest {
    pub image_url: String,
}

impl DeleteFavoriteRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_field("image_url", &self.image_url)
    }
}

/// Response of `POST /api/delete_favorite`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteFavoriteResponse {
    pub status: String,
    pub deleted: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_defaults_to_label() {
        let req = SaveFavoriteRequest {
            image_url: "https://pccasepins/coolermaster_images/h500.png".to_string(),
            description: None,
        };
        assert_eq!(req.into_new_image().description, "h500");
    }

    #[test]
    fn test_explicit_description_wins() {
        let req = SaveFavoriteRequest {
            image_url: "https://pccasepins/a.png".to_string(),
            description: Some("Glass side panel".to_string()),
        };
        let image = req.into_new_image();
        assert_eq!(image.url, "https://pccasepins/a.png");
        assert_eq!(image.description, "Glass side panel");
    }

    #[test]
    fn test_blank_url_is_rejected() {
        let req = DeleteFavoriteRequest {
            image_url: String::new(),
        };
        assert_eq!(
            req.validate(),
            Err(ValidationError::MissingField("image_url"))
        );
    }
}
