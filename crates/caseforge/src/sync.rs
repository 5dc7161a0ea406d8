//! Bucket-to-table sync job.

use caseforge_core::image::plan_sync;
use caseforge_core::objects::{ObjectStore, ObjectStoreError};
use caseforge_core::storage::{ImageRepository, RepositoryError};
use thiserror::Error;

/// Outcome of a completed sync run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Keys returned by the listing.
    pub listed: usize,
    /// Directory markers left out.
    pub skipped: usize,
    /// Rows written.
    pub upserted: usize,
}

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Listing failed: {0}")]
    Listing(#[from] ObjectStoreError),
    #[error("Storing image {url} failed: {source}")]
    Storage {
        url: String,
        #[source]
        source: RepositoryError,
    },
}

/// Mirrors every object under `prefix` into the image table.
///
/// Rows are upserted by URL, so rerunning over an unchanged bucket leaves
/// the row count as it was. The first error aborts the run.
pub async fn sync_bucket(
    objects: &dyn ObjectStore,
    images: &dyn ImageRepository,
    prefix: &str,
    public_host: &str,
) -> Result<SyncReport, SyncError> {
    let keys = objects.list_keys(prefix).await?;
    let plan = plan_sync(&keys, public_host);

    tracing::info!(
        bucket = %objects.bucket(),
        prefix = %prefix,
        listed = keys.len(),
        planned = plan.images.len(),
        "Starting sync"
    );

    let mut upserted = 0;
    for image in &plan.images {
        images
            .upsert_image(image)
            .await
            .map_err(|source| SyncError::Storage {
                url: image.url.clone(),
                source,
            })?;
        upserted += 1;
        tracing::debug!(url = %image.url, description = %image.description, "Upserted image");
    }

    Ok(SyncReport {
        listed: keys.len(),
        skipped: plan.skipped,
        upserted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryImageRepository;
    use crate::testing::{MemoryObjectStore, UnavailableRepository};

    const HOST: &str = "pccasepins.s3.amazonaws.com";

    fn bucket() -> MemoryObjectStore {
        MemoryObjectStore::new("pccasepins").with_keys([
            "coolermaster_images/",
            "coolermaster_images/h500.png",
            "coolermaster_images/td500.mesh.jpg",
            "coolermaster_images/nested/",
            "coolermaster_images/nested/q300l",
            "other/ignored.png",
        ])
    }

    #[tokio::test]
    async fn test_sync_upserts_each_object() {
        let objects = bucket();
        let repo = InMemoryImageRepository::new();

        let report = sync_bucket(&objects, &repo, "coolermaster_images/", HOST)
            .await
            .unwrap();

        assert_eq!(
            report,
            SyncReport {
                listed: 5,
                skipped: 2,
                upserted: 3,
            }
        );

        let mut rows: Vec<(String, String)> = repo
            .list_images()
            .await
            .unwrap()
            .into_iter()
            .map(|i| (i.url, i.description))
            .collect();
        rows.sort();

        assert_eq!(
            rows,
            vec![
                (
                    "https://pccasepins.s3.amazonaws.com/coolermaster_images/h500.png".to_string(),
                    "h500".to_string()
                ),
                (
                    "https://pccasepins.s3.amazonaws.com/coolermaster_images/nested/q300l"
                        .to_string(),
                    "q300l".to_string()
                ),
                (
                    "https://pccasepins.s3.amazonaws.com/coolermaster_images/td500.mesh.jpg"
                        .to_string(),
                    "td500".to_string()
                ),
            ]
        );
    }

    #[tokio::test]
    async fn test_rerun_keeps_row_count() {
        let objects = bucket();
        let repo = InMemoryImageRepository::new();

        sync_bucket(&objects, &repo, "coolermaster_images/", HOST)
            .await
            .unwrap();
        let second = sync_bucket(&objects, &repo, "coolermaster_images/", HOST)
            .await
            .unwrap();

        assert_eq!(second.upserted, 3);
        assert_eq!(repo.list_images().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_bucket_name_as_public_host() {
        let objects = MemoryObjectStore::new("pccasepins").with_keys(["imgs/a.png"]);
        let repo = InMemoryImageRepository::new();

        sync_bucket(&objects, &repo, "imgs/", "pccasepins")
            .await
            .unwrap();

        assert_eq!(
            repo.list_images().await.unwrap()[0].url,
            "https://pccasepins/imgs/a.png"
        );
    }

    #[tokio::test]
    async fn test_listing_error_aborts() {
        let objects = MemoryObjectStore::new("pccasepins").failing_list();
        let repo = InMemoryImageRepository::new();

        let result = sync_bucket(&objects, &repo, "coolermaster_images/", HOST).await;

        assert!(matches!(result, Err(SyncError::Listing(_))));
    }

    #[tokio::test]
    async fn test_storage_error_aborts() {
        let objects = bucket();

        let result = sync_bucket(&objects, &UnavailableRepository, "coolermaster_images/", HOST).await;

        match result {
            Err(SyncError::Storage { url, source }) => {
                assert_eq!(
                    url,
                    "https://pccasepins.s3.amazonaws.com/coolermaster_images/h500.png"
                );
                assert!(matches!(source, RepositoryError::ConnectionFailed(_)));
            }
            other => panic!("expected storage error, got {other:?}"),
        }
    }
}
