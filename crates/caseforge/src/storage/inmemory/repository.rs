//! In-memory repository implementations.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{SubsecRound, Utc};
use tokio::sync::RwLock;

use caseforge_core::feedback::FeedbackRecord;
use caseforge_core::image::{ImageRecord, NewImage};
use caseforge_core::storage::{FeedbackRepository, ImageRepository, Result};

#[derive(Debug, Default)]
struct ImageTable {
    rows: Vec<ImageRecord>,
    next_id: i64,
}

/// In-memory image table with the same upsert and ordering rules as the SQL backends.
#[derive(Debug, Clone, Default)]
pub struct InMemoryImageRepository {
    table: Arc<RwLock<ImageTable>>,
}

impl InMemoryImageRepository {
    /// Creates a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ImageRepository for InMemoryImageRepository {
    async fn list_images(&self) -> Result<Vec<ImageRecord>> {
        let table = self.table.read().await;
        let mut images = table.rows.clone();
        images.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(images)
    }

    async fn upsert_image(&self, image: &NewImage) -> Result<ImageRecord> {
        let mut table = self.table.write().await;
        let now = Utc::now().trunc_subsecs(6);

        if let Some(existing) = table.rows.iter_mut().find(|row| row.url == image.url) {
            existing.description = image.description.clone();
            existing.updated_at = now;
            return Ok(existing.clone());
        }

        table.next_id += 1;
        let record = ImageRecord {
            id: table.next_id,
            url: image.url.clone(),
            description: image.description.clone(),
            created_at: now,
            updated_at: now,
        };
        table.rows.push(record.clone());
        Ok(record)
    }

    async fn delete_images_by_url(&self, url: &str) -> Result<u64> {
        let mut table = self.table.write().await;
        let before = table.rows.len();
        table.rows.retain(|row| row.url != url);
        Ok((before - table.rows.len()) as u64)
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

/// In-memory feedback store, grouped by image URL.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFeedbackRepository {
    items: Arc<RwLock<HashMap<String, Vec<FeedbackRecord>>>>,
}

impl InMemoryFeedbackRepository {
    /// Creates a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FeedbackRepository for InMemoryFeedbackRepository {
    async fn put_feedback(&self, feedback: &FeedbackRecord) -> Result<()> {
        let mut items = self.items.write().await;
        let bucket = items.entry(feedback.image_url.clone()).or_default();
        bucket.push(feedback.clone());
        bucket.sort_by(|a, b| {
            a.submitted_at
                .cmp(&b.submitted_at)
                .then(a.id.cmp(&b.id))
        });
        Ok(())
    }

    async fn list_feedback(&self, image_url: &str) -> Result<Vec<FeedbackRecord>> {
        let items = self.items.read().await;
        Ok(items.get(image_url).cloned().unwrap_or_default())
    }
}
