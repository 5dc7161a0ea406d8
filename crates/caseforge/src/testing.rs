//! Test doubles for the AWS-backed seams.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use caseforge_core::feedback::FeedbackRecord;
use caseforge_core::image::{ImageRecord, NewImage};
use caseforge_core::inference::{InferenceError, ModelInvoker};
use caseforge_core::objects::{ObjectStore, ObjectStoreError};
use caseforge_core::storage::{FeedbackRepository, ImageRepository, RepositoryError, Result};

/// Answers each model id with a canned body and records every call.
#[derive(Default)]
pub struct StubInvoker {
    responses: HashMap<String, std::result::Result<Vec<u8>, InferenceError>>,
    calls: Mutex<Vec<(String, Vec<u8>)>>,
    delay: Option<Duration>,
}

impl StubInvoker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(mut self, model_id: &str, body: serde_json::Value) -> Self {
        let bytes = serde_json::to_vec(&body).unwrap();
        self.responses.insert(model_id.to_string(), Ok(bytes));
        self
    }

    /// Answers only after `delay`, measured on the tokio clock.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn with_error(mut self, model_id: &str, error: InferenceError) -> Self {
        self.responses.insert(model_id.to_string(), Err(error));
        self
    }

    /// Request bodies sent so far, parsed as JSON, with their model ids.
    pub fn calls(&self) -> Vec<(String, serde_json::Value)> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(model, body)| (model.clone(), serde_json::from_slice(body).unwrap()))
            .collect()
    }
}

#[async_trait]
impl ModelInvoker for StubInvoker {
    async fn invoke_model(
        &self,
        model_id: &str,
        body: Vec<u8>,
    ) -> std::result::Result<Vec<u8>, InferenceError> {
        self.calls
            .lock()
            .unwrap()
            .push((model_id.to_string(), body));

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.responses
            .get(model_id)
            .cloned()
            .unwrap_or_else(|| {
                Err(InferenceError::Invocation {
                    model_id: model_id.to_string(),
                    message: "no stubbed response".to_string(),
                })
            })
    }
}

/// An uploaded object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub key: String,
    pub body: Vec<u8>,
    pub content_type: String,
}

/// A bucket held in memory.
pub struct MemoryObjectStore {
    bucket: String,
    keys: Vec<String>,
    uploads: Mutex<Vec<StoredObject>>,
    fail_list: bool,
    fail_put: bool,
}

impl MemoryObjectStore {
    pub fn new(bucket: &str) -> Self {
        Self {
            bucket: bucket.to_string(),
            keys: Vec::new(),
            uploads: Mutex::new(Vec::new()),
            fail_list: false,
            fail_put: false,
        }
    }

    /// Preloads keys returned by `list_keys`.
    pub fn with_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keys = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    pub fn failing_put(mut self) -> Self {
        self.fail_put = true;
        self
    }

    pub fn uploads(&self) -> Vec<StoredObject> {
        self.uploads.lock().unwrap().clone()
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    fn bucket(&self) -> &str {
        &self.bucket
    }

    async fn list_keys(&self, prefix: &str) -> std::result::Result<Vec<String>, ObjectStoreError> {
        if self.fail_list {
            return Err(ObjectStoreError::ListFailed {
                bucket: self.bucket.clone(),
                prefix: prefix.to_string(),
                message: "AccessDenied".to_string(),
            });
        }
        Ok(self
            .keys
            .iter()
            .filter(|key| key.starts_with(prefix))
            .cloned()
            .collect())
    }

    async fn put_object(
        &self,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> std::result::Result<(), ObjectStoreError> {
        if self.fail_put {
            return Err(ObjectStoreError::PutFailed {
                bucket: self.bucket.clone(),
                key: key.to_string(),
                message: "AccessDenied".to_string(),
            });
        }
        self.uploads.lock().unwrap().push(StoredObject {
            key: key.to_string(),
            body,
            content_type: content_type.to_string(),
        });
        Ok(())
    }
}

/// A database that is always down.
pub struct UnavailableRepository;

fn unavailable() -> RepositoryError {
    RepositoryError::ConnectionFailed("database is down".to_string())
}

#[async_trait]
impl ImageRepository for UnavailableRepository {
    async fn list_images(&self) -> Result<Vec<ImageRecord>> {
        Err(unavailable())
    }

    async fn upsert_image(&self, _image: &NewImage) -> Result<ImageRecord> {
        Err(unavailable())
    }

    async fn delete_images_by_url(&self, _url: &str) -> Result<u64> {
        Err(unavailable())
    }

    async fn ping(&self) -> Result<()> {
        Err(unavailable())
    }
}

#[async_trait]
impl FeedbackRepository for UnavailableRepository {
    async fn put_feedback(&self, _feedback: &FeedbackRecord) -> Result<()> {
        Err(unavailable())
    }

    async fn list_feedback(&self, _image_url: &str) -> Result<Vec<FeedbackRecord>> {
        Err(unavailable())
    }
}
