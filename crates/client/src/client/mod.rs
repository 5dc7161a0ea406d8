//! HTTP client for the caseforge API.

pub mod feedback;
pub mod health;
pub mod images;
pub mod inference;

use crate::error::{ClientError, Result};

/// HTTP client for the caseforge API.
#[derive(Debug, Clone)]
pub struct CaseforgeClient {
    client: reqwest::Client,
    base_url: String,
}

impl CaseforgeClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Handle error responses.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            response.json().await.map_err(ClientError::from)
        } else if status.as_u16() == 404 {
            Err(ClientError::NotFound {
                resource: response.url().path().to_string(),
            })
        } else {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ClientError::from_body(status.as_u16(), &body))
        }
    }
}
