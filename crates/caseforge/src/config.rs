use std::{env, time::Duration};

use caseforge_core::image::default_public_host;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// AWS region for every SDK client (default: "us-east-1")
    pub aws_region: String,
    /// DynamoDB table holding feedback (default: "UserFeedback")
    pub dynamodb_table_name: String,
    /// Bedrock model used to refine prompts (default: "amazon.titan-text-lite-v1")
    pub bedrock_text_model: String,
    /// Bedrock model used to draw images (default: "stability.stable-diffusion-xl-v1")
    pub bedrock_image_model: String,
    /// Bucket holding the case images (default: "pccasepins")
    pub s3_bucket: String,
    /// Key prefix mirrored by the sync job (default: "coolermaster_images/")
    pub s3_prefix: String,
    /// Host used to build public object URLs (default: "<bucket>.s3.amazonaws.com")
    pub s3_public_host: String,
    /// Key prefix for uploaded generated images (default: "generated/")
    pub generated_image_prefix: String,
    /// Path to SQLite database file (default: "caseforge.db")
    /// Note: Only used when the `sqlite` feature is enabled.
    #[allow(dead_code)]
    pub sqlite_path: String,
    /// MySQL connection URL (default: "mysql://admin@localhost:3306/s3images")
    /// Note: Only used when the `mysql` feature is enabled.
    #[allow(dead_code)]
    pub database_url: String,
    /// Per-request timeout in seconds for table, feedback and probe routes (default: 10)
    pub request_timeout_seconds: u64,
    /// Per-request timeout in seconds for model-backed routes (default: 120)
    pub inference_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `AWS_REGION` - AWS region (default: "us-east-1")
    /// - `DYNAMODB_TABLE_NAME` - Feedback table (default: "UserFeedback")
    /// - `BEDROCK_TEXT_MODEL` - Text model id (default: "amazon.titan-text-lite-v1")
    /// - `BEDROCK_IMAGE_MODEL` - Image model id (default: "stability.stable-diffusion-xl-v1")
    /// - `S3_BUCKET` - Image bucket (default: "pccasepins")
    /// - `S3_PREFIX` - Mirrored prefix (default: "coolermaster_images/")
    /// - `S3_PUBLIC_HOST` - Public URL host (default: "<S3_BUCKET>.s3.amazonaws.com")
    /// - `GENERATED_IMAGE_PREFIX` - Prefix for generated images (default: "generated/")
    /// - `SQLITE_PATH` - SQLite database path (default: "caseforge.db")
    /// - `DATABASE_URL` - MySQL URL (default: "mysql://admin@localhost:3306/s3images")
    /// - `REQUEST_TIMEOUT_SECONDS` - Request timeout (default: 10)
    /// - `INFERENCE_TIMEOUT_SECONDS` - Timeout of `/refine-prompt` and `/generate-image` (default: 120)
    pub fn from_env() -> Self {
        let s3_bucket = env::var("S3_BUCKET").unwrap_or_else(|_| "pccasepins".to_string());
        let s3_public_host = env::var("S3_PUBLIC_HOST")
            .ok()
            .filter(|host| !host.trim().is_empty())
            .unwrap_or_else(|| default_public_host(&s3_bucket));

        Self {
            aws_region: env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            dynamodb_table_name: env::var("DYNAMODB_TABLE_NAME")
                .unwrap_or_else(|_| "UserFeedback".to_string()),
            bedrock_text_model: env::var("BEDROCK_TEXT_MODEL")
                .unwrap_or_else(|_| "amazon.titan-text-lite-v1".to_string()),
            bedrock_image_model: env::var("BEDROCK_IMAGE_MODEL")
                .unwrap_or_else(|_| "stability.stable-diffusion-xl-v1".to_string()),
            s3_prefix: env::var("S3_PREFIX").unwrap_or_else(|_| "coolermaster_images/".to_string()),
            s3_public_host,
            s3_bucket,
            generated_image_prefix: env::var("GENERATED_IMAGE_PREFIX")
                .unwrap_or_else(|_| "generated/".to_string()),
            sqlite_path: env::var("SQLITE_PATH").unwrap_or_else(|_| "caseforge.db".to_string()),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "mysql://admin@localhost:3306/s3images".to_string()),
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            inference_timeout_seconds: env::var("INFERENCE_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(120),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Get the model-backed route timeout as a Duration.
    pub fn inference_timeout(&self) -> Duration {
        Duration::from_secs(self.inference_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
