//! Client error types.

use caseforge_core::validation::ValidationError;
use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server returned {status}: {message}")]
    ServerError { status: u16, message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),
}

impl ClientError {
    /// Builds a server error, preferring the `error` field of a JSON body.
    pub fn from_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
            .unwrap_or_else(|| body.to_string());
        Self::ServerError { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_body_uses_error_field() {
        let err = ClientError::from_body(503, r#"{"error":"Connection failed: refused"}"#);
        assert_eq!(
            err.to_string(),
            "Server returned 503: Connection failed: refused"
        );
    }

    #[test]
    fn test_from_body_falls_back_to_raw_text() {
        let err = ClientError::from_body(502, "Bad Gateway");
        assert_eq!(err.to_string(), "Server returned 502: Bad Gateway");
    }
}
