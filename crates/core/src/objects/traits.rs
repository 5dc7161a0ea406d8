use async_trait::async_trait;

use super::ObjectStoreError;

/// A single bucket of objects.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Name of the bucket this store writes to.
    fn bucket(&self) -> &str;

    /// Lists every key under `prefix`, across all result pages.
    async fn list_keys(&self, prefix: &str) -> Result<Vec<String>, ObjectStoreError>;

    /// Uploads `body` under `key`.
    async fn put_object(
        &self,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), ObjectStoreError>;
}
