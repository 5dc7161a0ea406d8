//! Health check operations.

use super::CaseforgeClient;
use crate::error::{ClientError, Result};
use serde::{Deserialize, Serialize};

/// Readiness probe result.
#[derive(Debug, Serialize, Deserialize)]
pub struct Readiness {
    pub healthy: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CaseforgeClient {
    /// Liveness probe. Succeeds when the server answers 200.
    pub async fn livez(&self) -> Result<()> {
        let response = self.client.get(self.url("/livez")).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: "liveness probe failed".to_string(),
            })
        }
    }

    /// Readiness probe. A 503 still carries a readiness body.
    pub async fn readyz(&self) -> Result<Readiness> {
        let response = self.client.get(self.url("/readyz")).send().await?;
        if response.status() == reqwest::StatusCode::SERVICE_UNAVAILABLE {
            return response.json().await.map_err(ClientError::from);
        }
        self.handle_response(response).await
    }
}
