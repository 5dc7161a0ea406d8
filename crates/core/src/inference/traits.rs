use async_trait::async_trait;

use super::InferenceError;

/// Sends a JSON body to a hosted model and returns the raw response body.
#[async_trait]
pub trait ModelInvoker: Send + Sync {
    async fn invoke_model(&self, model_id: &str, body: Vec<u8>)
        -> Result<Vec<u8>, InferenceError>;
}
