//! SQLite row conversion functions.

use caseforge_core::image::ImageRecord;
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::Row;

/// Convert a SQLite row to an ImageRecord.
///
/// Expected columns: id, image_url, description, created_at, updated_at
pub fn row_to_image(row: &Row) -> rusqlite::Result<ImageRecord> {
    let id: i64 = row.get(0)?;
    let url: String = row.get(1)?;
    let description: Option<String> = row.get(2)?;
    let created_at: String = row.get(3)?;
    let updated_at: String = row.get(4)?;

    Ok(ImageRecord {
        id,
        url,
        description: description.unwrap_or_default(),
        created_at: parse_datetime(&created_at)?,
        updated_at: parse_datetime(&updated_at)?,
    })
}

/// Parse a datetime from RFC 3339 string.
fn parse_datetime(s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })
}

/// Format a DateTime for SQLite storage.
///
/// Fixed-width UTC text, so lexical order matches time order.
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}
