use serde::{Deserialize, Serialize};

/// Sampling parameters sent with every prompt-refinement request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextGenerationConfig {
    pub temperature: f32,
    pub max_token_count: u32,
    pub stop_sequences: Vec<String>,
    pub top_p: f32,
}

impl Default for TextGenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_token_count: 300,
            stop_sequences: Vec::new(),
            top_p: 0.9,
        }
    }
}

/// Diffusion parameters sent with every image-generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageGenerationConfig {
    pub cfg_scale: u32,
    pub seed: u64,
    pub steps: u32,
}

impl Default for ImageGenerationConfig {
    fn default() -> Self {
        Self {
            cfg_scale: 10,
            seed: 0,
            steps: 50,
        }
    }
}
