//! SQLite repository implementation.
//!
//! Implements `ImageRepository` from `caseforge_core::storage` using SQLite.

use async_trait::async_trait;
use chrono::Utc;
use tokio_rusqlite::Connection;

use caseforge_core::image::{ImageRecord, NewImage};
use caseforge_core::storage::{ImageRepository, RepositoryError, Result};

use super::conversions::{format_datetime, row_to_image};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based image repository.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Data is lost when the connection is dropped.
    #[cfg_attr(not(test), allow(dead_code))]
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl ImageRepository for SqliteRepository {
    async fn list_images(&self) -> Result<Vec<ImageRecord>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_IMAGES).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_image).map_err(wrap_err)?;

                let mut images = Vec::new();
                for row_result in rows {
                    images.push(row_result.map_err(wrap_err)?);
                }
                Ok(images)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Image"))
    }

    async fn upsert_image(&self, image: &NewImage) -> Result<ImageRecord> {
        let url = image.url.clone();
        let description = image.description.clone();
        let now = format_datetime(&Utc::now());

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::UPSERT_IMAGE).map_err(wrap_err)?;
                stmt.query_row(rusqlite::params![url, description, now], row_to_image)
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Image"))
    }

    async fn delete_images_by_url(&self, url: &str) -> Result<u64> {
        let url = url.to_string();

        self.conn
            .call(move |conn| {
                let removed = conn
                    .execute(schema::DELETE_IMAGES_BY_URL, [&url])
                    .map_err(wrap_err)?;
                Ok(removed as u64)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Image"))
    }

    async fn ping(&self) -> Result<()> {
        self.conn
            .call(|conn| {
                conn.query_row(schema::PING, [], |row| row.get::<_, i64>(0))
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Image"))
    }
}
