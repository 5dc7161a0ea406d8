//! Request and response bodies of the hosted text and image models.
//!
//! Text generation speaks the Titan text format, image generation the
//! Stability diffusion format.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::config::{ImageGenerationConfig, TextGenerationConfig};
use super::InferenceError;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TextRequest<'a> {
    input_text: &'a str,
    text_generation_config: &'a TextGenerationConfig,
}

#[derive(Deserialize)]
struct TextResponse {
    #[serde(default)]
    results: Vec<TextResult>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TextResult {
    #[serde(default)]
    output_text: String,
}

#[derive(Serialize)]
struct TextPrompt<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct ImageRequest<'a> {
    text_prompts: [TextPrompt<'a>; 1],
    #[serde(flatten)]
    config: &'a ImageGenerationConfig,
}

#[derive(Deserialize)]
struct ImageResponse {
    #[serde(default)]
    artifacts: Vec<Artifact>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Artifact {
    base64: String,
    #[serde(default)]
    finish_reason: Option<String>,
}

/// Builds the body of a prompt-refinement request.
pub fn text_request_body(
    prompt: &str,
    config: &TextGenerationConfig,
) -> Result<Vec<u8>, InferenceError> {
    serde_json::to_vec(&TextRequest {
        input_text: prompt,
        text_generation_config: config,
    })
    .map_err(|e| InferenceError::Serialization(e.to_string()))
}

/// Extracts the generated text. A response without results yields `""`.
pub fn parse_text_response(body: &[u8]) -> Result<String, InferenceError> {
    let response: TextResponse =
        serde_json::from_slice(body).map_err(|e| InferenceError::InvalidResponse(e.to_string()))?;

    Ok(response
        .results
        .into_iter()
        .next()
        .map(|result| result.output_text)
        .unwrap_or_default())
}

/// Builds the body of an image-generation request.
pub fn image_request_body(
    prompt: &str,
    config: &ImageGenerationConfig,
) -> Result<Vec<u8>, InferenceError> {
    serde_json::to_vec(&ImageRequest {
        text_prompts: [TextPrompt { text: prompt }],
        config,
    })
    .map_err(|e| InferenceError::Serialization(e.to_string()))
}

/// Decodes the images of a diffusion response.
///
/// Artifacts flagged with a finish reason other than `SUCCESS` (for example
/// `CONTENT_FILTERED`) are dropped. Fails with [`InferenceError::NoImages`]
/// when nothing is left.
pub fn decode_image_artifacts(body: &[u8]) -> Result<Vec<Vec<u8>>, InferenceError> {
    let response: ImageResponse =
        serde_json::from_slice(body).map_err(|e| InferenceError::InvalidResponse(e.to_string()))?;

    let images = response
        .artifacts
        .into_iter()
        .filter(|artifact| {
            artifact
                .finish_reason
                .as_deref()
                .is_none_or(|reason| reason == "SUCCESS")
        })
        .map(|artifact| {
            STANDARD
                .decode(artifact.base64.as_bytes())
                .map_err(|e| InferenceError::InvalidResponse(format!("bad base64 artifact: {e}")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if images.is_empty() {
        return Err(InferenceError::NoImages);
    }
    Ok(images)
}

/// Object key for a generated image: `{prefix}{product-slug}/{id}.png`.
pub fn generated_image_key(prefix: &str, product_type: &str, id: Uuid) -> String {
    format!("{prefix}{}/{id}.png", slugify(product_type))
}

fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    for c in value.trim().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        "design".to_string()
    } else {
        slug.to_string()
    }
}
