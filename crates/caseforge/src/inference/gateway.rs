use std::sync::Arc;

use uuid::Uuid;

use caseforge_core::image::public_url;
use caseforge_core::inference::{
    decode_image_artifacts, extract_keywords, generated_image_key, image_request_body,
    parse_text_response, text_request_body, ImageGenerationConfig, ImageResponse,
    InferenceError, ModelInvoker, PromptRequest, RefinedPrompt, TextGenerationConfig,
};
use caseforge_core::objects::ObjectStore;

use crate::config::Config;

const PNG: &str = "image/png";

/// Model ids, sampling parameters and upload location used by the gateway.
#[derive(Debug, Clone)]
pub struct GatewaySettings {
    pub text_model_id: String,
    pub image_model_id: String,
    pub text_config: TextGenerationConfig,
    pub image_config: ImageGenerationConfig,
    /// Key prefix for uploaded images.
    pub generated_prefix: String,
    /// Host used to build the returned image URLs.
    pub public_host: String,
}

impl GatewaySettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            text_model_id: config.bedrock_text_model.clone(),
            image_model_id: config.bedrock_image_model.clone(),
            text_config: TextGenerationConfig::default(),
            image_config: ImageGenerationConfig::default(),
            generated_prefix: config.generated_image_prefix.clone(),
            public_host: config.s3_public_host.clone(),
        }
    }
}

/// Forwards prompts to the hosted models and publishes generated images.
pub struct InferenceGateway {
    invoker: Arc<dyn ModelInvoker>,
    objects: Arc<dyn ObjectStore>,
    settings: GatewaySettings,
}

impl InferenceGateway {
    pub fn new(
        invoker: Arc<dyn ModelInvoker>,
        objects: Arc<dyn ObjectStore>,
        settings: GatewaySettings,
    ) -> Self {
        Self {
            invoker,
            objects,
            settings,
        }
    }

    /// Sends the prompt to the text model and tags the generated text.
    pub async fn refine_prompt(
        &self,
        request: &PromptRequest,
    ) -> Result<RefinedPrompt, InferenceError> {
        let body = text_request_body(&request.prompt, &self.settings.text_config)?;
        let response = self
            .invoker
            .invoke_model(&self.settings.text_model_id, body)
            .await?;
        let refined_prompt = parse_text_response(&response)?;
        let keywords = extract_keywords(&refined_prompt);

        tracing::info!(
            model = %self.settings.text_model_id,
            product_type = %request.product_type,
            refined_len = refined_prompt.len(),
            "Refined prompt"
        );

        Ok(RefinedPrompt {
            original_prompt: request.prompt.clone(),
            refined_prompt,
            keywords,
        })
    }

    /// Draws images for the prompt, uploads each one and returns their public URLs.
    ///
    /// Stops at the first failed upload.
    pub async fn generate_images(
        &self,
        request: &PromptRequest,
    ) -> Result<ImageResponse, InferenceError> {
        let body = image_request_body(&request.prompt, &self.settings.image_config)?;
        let response = self
            .invoker
            .invoke_model(&self.settings.image_model_id, body)
            .await?;
        let images = decode_image_artifacts(&response)?;

        let mut image_urls = Vec::with_capacity(images.len());
        for image in images {
            let key = generated_image_key(
                &self.settings.generated_prefix,
                &request.product_type,
                Uuid::new_v4(),
            );
            self.objects
                .put_object(&key, image, PNG)
                .await
                .map_err(|e| InferenceError::Upload(e.to_string()))?;
            image_urls.push(public_url(&self.settings.public_host, &key));
        }

        tracing::info!(
            model = %self.settings.image_model_id,
            bucket = %self.objects.bucket(),
            count = image_urls.len(),
            "Generated images"
        );

        Ok(ImageResponse { image_urls })
    }
}
