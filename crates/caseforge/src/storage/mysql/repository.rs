//! MySQL repository implementation.
//!
//! Implements `ImageRepository` from `caseforge_core::storage` on a `sqlx` MySQL pool.

use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use sqlx::mysql::{MySqlPool, MySqlPoolOptions, MySqlRow};
use sqlx::Row;

use caseforge_core::image::{ImageRecord, NewImage};
use caseforge_core::storage::{ImageRepository, RepositoryError, Result};

use super::error::map_sqlx_error;
use super::schema;

const MAX_CONNECTIONS: u32 = 5;

/// MySQL-based image repository.
pub struct MySqlRepository {
    pool: MySqlPool,
}

impl MySqlRepository {
    /// Connects to `database_url` and creates the `images` table if missing.
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(database_url)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        sqlx::query(schema::CREATE_IMAGES_TABLE)
            .execute(&pool)
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        let repo = Self { pool };
        repo.migrate().await?;
        Ok(repo)
    }

    /// Upgrades an `images` table created before the UNIQUE URL key and the
    /// timestamp columns existed.
    async fn migrate(&self) -> Result<()> {
        let columns: Vec<String> = sqlx::query_scalar(schema::SELECT_IMAGE_COLUMNS)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Image", "schema"))?;
        let unique_url_indexes: i64 = sqlx::query_scalar(schema::COUNT_UNIQUE_URL_INDEXES)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Image", "schema"))?;

        for statement in schema::plan_migration(&columns, unique_url_indexes > 0) {
            tracing::info!(statement = %statement.trim(), "Migrating images table");
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| map_sqlx_error(e, "Image", "schema"))?;
        }

        Ok(())
    }
}

fn row_to_image(row: &MySqlRow) -> std::result::Result<ImageRecord, sqlx::Error> {
    let description: Option<String> = row.try_get("description")?;
    let created_at: NaiveDateTime = row.try_get("created_at")?;
    let updated_at: NaiveDateTime = row.try_get("updated_at")?;

    Ok(ImageRecord {
        id: row.try_get("id")?,
        url: row.try_get("image_url")?,
        description: description.unwrap_or_default(),
        created_at: created_at.and_utc(),
        updated_at: updated_at.and_utc(),
    })
}

#[async_trait]
impl ImageRepository for MySqlRepository {
    async fn list_images(&self) -> Result<Vec<ImageRecord>> {
        let rows = sqlx::query(schema::SELECT_IMAGES)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Image", "*"))?;

        rows.iter()
            .map(|row| row_to_image(row).map_err(|e| map_sqlx_error(e, "Image", "*")))
            .collect()
    }

    async fn upsert_image(&self, image: &NewImage) -> Result<ImageRecord> {
        let now = Utc::now().naive_utc();

        sqlx::query(schema::UPSERT_IMAGE)
            .bind(&image.url)
            .bind(&image.description)
            .bind(now)
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Image", &image.url))?;

        let row = sqlx::query(schema::SELECT_IMAGE_BY_URL)
            .bind(&image.url)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Image", &image.url))?;

        row_to_image(&row).map_err(|e| map_sqlx_error(e, "Image", &image.url))
    }

    async fn delete_images_by_url(&self, url: &str) -> Result<u64> {
        let result = sqlx::query(schema::DELETE_IMAGES_BY_URL)
            .bind(url)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Image", url))?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query(schema::PING)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Image", "ping"))?;
        Ok(())
    }
}
