use async_trait::async_trait;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;

use caseforge_core::objects::{ObjectStore, ObjectStoreError};

use crate::pagination::collect_pages;

/// One S3 bucket.
pub struct S3ObjectStore {
    client: Client,
    bucket: String,
}

impl S3ObjectStore {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    fn bucket(&self) -> &str {
        &self.bucket
    }

    async fn list_keys(&self, prefix: &str) -> Result<Vec<String>, ObjectStoreError> {
        let keys = collect_pages(|continuation_token: Option<String>| {
            let request = self
                .client
                .list_objects_v2()
                .bucket(&self.bucket)
                .prefix(prefix)
                .set_continuation_token(continuation_token);
            let bucket = self.bucket.clone();

            async move {
                let output = request.send().await.map_err(|e| ObjectStoreError::ListFailed {
                    bucket,
                    prefix: prefix.to_string(),
                    message: DisplayErrorContext(&e).to_string(),
                })?;

                let keys: Vec<String> = output
                    .contents()
                    .iter()
                    .filter_map(|object| object.key().map(str::to_string))
                    .collect();
                let next = output.next_continuation_token().map(str::to_string);
                Ok::<_, ObjectStoreError>((keys, next))
            }
        })
        .await?;

        tracing::debug!(
            bucket = %self.bucket,
            prefix = %prefix,
            count = keys.len(),
            "Listed objects"
        );
        Ok(keys)
    }

    async fn put_object(
        &self,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), ObjectStoreError> {
        let size = body.len();

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| ObjectStoreError::PutFailed {
                bucket: self.bucket.clone(),
                key: key.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        tracing::debug!(bucket = %self.bucket, key = %key, size, "Uploaded object");
        Ok(())
    }
}
