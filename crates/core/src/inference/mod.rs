//! Shaping of hosted-model requests and responses.

mod bodies;
mod config;
mod error;
mod keywords;
mod requests;
mod traits;

pub use bodies::{
    decode_image_artifacts, generated_image_key, image_request_body, parse_text_response,
    text_request_body,
};
pub use config::{ImageGenerationConfig, TextGenerationConfig};
pub use error::InferenceError;
pub use keywords::{extract_keywords, DEFAULT_KEYWORDS, RGB_KEYWORDS};
pub use requests::{ImageResponse, PromptRequest, RefinedPrompt};
pub use traits::ModelInvoker;
