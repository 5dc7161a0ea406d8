use async_trait::async_trait;

use crate::feedback::FeedbackRecord;
use crate::image::{ImageRecord, NewImage};

use super::Result;

/// Repository for image records mirrored from the bucket.
#[async_trait]
pub trait ImageRepository: Send + Sync {
    /// Lists all images, newest first.
    async fn list_images(&self) -> Result<Vec<ImageRecord>>;

    /// Inserts an image, or refreshes the description of the image that
    /// already has the same URL. Returns the stored record.
    async fn upsert_image(&self, image: &NewImage) -> Result<ImageRecord>;

    /// Deletes every image whose URL equals `url`. Returns the number removed.
    async fn delete_images_by_url(&self, url: &str) -> Result<u64>;

    /// Cheap round trip used by the readiness probe.
    async fn ping(&self) -> Result<()>;
}

/// Repository for user feedback on images.
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// Stores a feedback record.
    async fn put_feedback(&self, feedback: &FeedbackRecord) -> Result<()>;

    /// Lists feedback for an image URL in submission order.
    async fn list_feedback(&self, image_url: &str) -> Result<Vec<FeedbackRecord>>;
}
