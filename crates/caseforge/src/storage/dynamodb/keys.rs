//! DynamoDB key generation functions.
//!
//! Feedback for one image shares a partition; the sort key orders it by
//! submission time.

use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

pub const IMAGE_PREFIX: &str = "IMAGE#";
pub const FEEDBACK_PREFIX: &str = "FEEDBACK#";

/// Generate partition key for feedback on an image.
///
/// Pattern: `IMAGE#<image_url>`
pub fn feedback_pk(image_url: &str) -> String {
    format!("{IMAGE_PREFIX}{image_url}")
}

/// Generate sort key for a feedback record.
///
/// Pattern: `FEEDBACK#<submitted_at>#<feedback_id>`
pub fn feedback_sk(submitted_at: &DateTime<Utc>, id: Uuid) -> String {
    format!("{FEEDBACK_PREFIX}{}#{id}", format_timestamp(submitted_at))
}

/// Fixed-width UTC timestamp, so sort keys order chronologically.
pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}
