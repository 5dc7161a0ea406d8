use async_trait::async_trait;
use aws_sdk_bedrockruntime::error::DisplayErrorContext;
use aws_sdk_bedrockruntime::primitives::Blob;
use aws_sdk_bedrockruntime::Client;

use caseforge_core::inference::{InferenceError, ModelInvoker};

const JSON: &str = "application/json";

/// Invokes models through the Bedrock runtime `InvokeModel` API.
pub struct BedrockInvoker {
    client: Client,
}

impl BedrockInvoker {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ModelInvoker for BedrockInvoker {
    async fn invoke_model(
        &self,
        model_id: &str,
        body: Vec<u8>,
    ) -> Result<Vec<u8>, InferenceError> {
        let output = self
            .client
            .invoke_model()
            .model_id(model_id)
            .content_type(JSON)
            .accept(JSON)
            .body(Blob::new(body))
            .send()
            .await
            .map_err(|e| InferenceError::Invocation {
                model_id: model_id.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        Ok(output.body.into_inner())
    }
}
