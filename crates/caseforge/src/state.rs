//! Application state shared by all request handlers.
//!
//! Repositories, the bucket and the inference gateway are held as trait
//! objects. Which image backend sits behind `image_repo` is chosen at compile
//! time by feature flag.

use std::sync::Arc;

use aws_config::{BehaviorVersion, Region, SdkConfig};

use caseforge_core::objects::ObjectStore;
use caseforge_core::storage::{FeedbackRepository, ImageRepository};

use crate::config::Config;
use crate::inference::{BedrockInvoker, GatewaySettings, InferenceGateway};
use crate::objects::S3ObjectStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Image table (SQLite, MySQL or in-memory).
    pub image_repo: Arc<dyn ImageRepository>,
    /// Feedback store (DynamoDB unless built with `inmemory`).
    pub feedback_repo: Arc<dyn FeedbackRepository>,
    /// Bucket mirrored by the sync job and receiving generated images.
    pub objects: Arc<dyn ObjectStore>,
    /// Prompt refinement and image generation.
    pub gateway: Arc<InferenceGateway>,
}

impl AppState {
    /// Creates a new AppState from already-built components.
    pub fn build(
        image_repo: Arc<dyn ImageRepository>,
        feedback_repo: Arc<dyn FeedbackRepository>,
        objects: Arc<dyn ObjectStore>,
        gateway: Arc<InferenceGateway>,
    ) -> Self {
        Self {
            image_repo,
            feedback_repo,
            objects,
            gateway,
        }
    }

    /// Creates AppState with the compiled-in image backend and AWS clients
    /// for the configured region.
    pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
        let aws_config = load_aws_config(config).await;

        let objects: Arc<dyn ObjectStore> = Arc::new(S3ObjectStore::new(
            aws_sdk_s3::Client::new(&aws_config),
            config.s3_bucket.clone(),
        ));
        let invoker = Arc::new(BedrockInvoker::new(aws_sdk_bedrockruntime::Client::new(
            &aws_config,
        )));
        let gateway = Arc::new(InferenceGateway::new(
            invoker,
            objects.clone(),
            GatewaySettings::from_config(config),
        ));

        let image_repo = backend::image_repository(config).await?;
        let feedback_repo = backend::feedback_repository(config, &aws_config);

        tracing::info!(
            backend = backend::NAME,
            region = %config.aws_region,
            bucket = %config.s3_bucket,
            "Application state initialized"
        );

        Ok(Self::build(image_repo, feedback_repo, objects, gateway))
    }
}

async fn load_aws_config(config: &Config) -> SdkConfig {
    aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.aws_region.clone()))
        .load()
        .await
}

#[cfg(feature = "sqlite")]
mod backend {
    use super::*;
    use crate::storage::{DynamoDbFeedbackRepository, SqliteRepository};

    pub const NAME: &str = "sqlite";

    pub async fn image_repository(config: &Config) -> anyhow::Result<Arc<dyn ImageRepository>> {
        Ok(Arc::new(SqliteRepository::new(&config.sqlite_path).await?))
    }

    pub fn feedback_repository(
        config: &Config,
        aws_config: &SdkConfig,
    ) -> Arc<dyn FeedbackRepository> {
        Arc::new(DynamoDbFeedbackRepository::new(
            aws_sdk_dynamodb::Client::new(aws_config),
            config.dynamodb_table_name.clone(),
        ))
    }
}

#[cfg(feature = "mysql")]
mod backend {
    use super::*;
    use crate::storage::{DynamoDbFeedbackRepository, MySqlRepository};

    pub const NAME: &str = "mysql";

    pub async fn image_repository(config: &Config) -> anyhow::Result<Arc<dyn ImageRepository>> {
        Ok(Arc::new(MySqlRepository::new(&config.database_url).await?))
    }

    pub fn feedback_repository(
        config: &Config,
        aws_config: &SdkConfig,
    ) -> Arc<dyn FeedbackRepository> {
        Arc::new(DynamoDbFeedbackRepository::new(
            aws_sdk_dynamodb::Client::new(aws_config),
            config.dynamodb_table_name.clone(),
        ))
    }
}

#[cfg(feature = "inmemory")]
mod backend {
    use super::*;
    use crate::storage::{InMemoryFeedbackRepository, InMemoryImageRepository};

    pub const NAME: &str = "inmemory";

    pub async fn image_repository(_config: &Config) -> anyhow::Result<Arc<dyn ImageRepository>> {
        Ok(Arc::new(InMemoryImageRepository::new()))
    }

    pub fn feedback_repository(
        _config: &Config,
        _aws_config: &SdkConfig,
    ) -> Arc<dyn FeedbackRepository> {
        Arc::new(InMemoryFeedbackRepository::new())
    }
}

// ============================================================================
// Test support - provides Default implementation for unit tests
// ============================================================================
