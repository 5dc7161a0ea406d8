use thiserror::Error;

/// Errors raised while talking to a hosted model.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InferenceError {
    #[error("Model invocation failed for {model_id}: {message}")]
    Invocation { model_id: String, message: String },
    #[error("Invalid model response: {0}")]
    InvalidResponse(String),
    #[error("Model returned no usable images")]
    NoImages,
    #[error("Image upload failed: {0}")]
    Upload(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invocation_display() {
        let error = InferenceError::Invocation {
            model_id: "amazon.titan-text-lite-v1".to_string(),
            message: "throttled".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Model invocation failed for amazon.titan-text-lite-v1: throttled"
        );
    }
}
