//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and feedback records.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use caseforge_core::feedback::FeedbackRecord;
use caseforge_core::storage::RepositoryError;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::keys;

pub const ENTITY_TYPE_FEEDBACK: &str = "FEEDBACK";

/// Convert a FeedbackRecord to a DynamoDB item.
///
/// Optional fields are written only when present, so an absent tag list
/// stays absent and an empty one stays empty.
pub fn feedback_to_item(feedback: &FeedbackRecord) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    // Keys
    item.insert(
        "PK".to_string(),
        AttributeValue::S(keys::feedback_pk(&feedback.image_url)),
    );
    item.insert(
        "SK".to_string(),
        AttributeValue::S(keys::feedback_sk(&feedback.submitted_at, feedback.id)),
    );

    item.insert(
        "entityType".to_string(),
        AttributeValue::S(ENTITY_TYPE_FEEDBACK.to_string()),
    );

    // Data
    item.insert("id".to_string(), AttributeValue::S(feedback.id.to_string()));
    item.insert(
        "image_url".to_string(),
        AttributeValue::S(feedback.image_url.clone()),
    );
    item.insert(
        "rating".to_string(),
        AttributeValue::N(feedback.rating.to_string()),
    );
    if let Some(tags) = &feedback.tags {
        item.insert(
            "tags".to_string(),
            AttributeValue::L(tags.iter().cloned().map(AttributeValue::S).collect()),
        );
    }
    if let Some(comments) = &feedback.comments {
        item.insert(
            "comments".to_string(),
            AttributeValue::S(comments.clone()),
        );
    }
    item.insert(
        "submitted_at".to_string(),
        AttributeValue::S(keys::format_timestamp(&feedback.submitted_at)),
    );

    item
}

/// Convert a DynamoDB item to a FeedbackRecord.
pub fn item_to_feedback(
    item: &HashMap<String, AttributeValue>,
) -> Result<FeedbackRecord, RepositoryError> {
    Ok(FeedbackRecord {
        id: get_uuid(item, "id")?,
        image_url: get_string(item, "image_url")?,
        rating: get_i32(item, "rating")?,
        tags: get_optional_string_list(item, "tags")?,
        comments: get_optional_string(item, "comments"),
        submitted_at: get_datetime(item, "submitted_at")?,
    })
}

// ============================================================================
// Helper functions
// ============================================================================

fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

fn get_optional_string(item: &HashMap<String, AttributeValue>, key: &str) -> Option<String> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
}

fn get_i32(item: &HashMap<String, AttributeValue>, key: &str) -> Result<i32, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_n().ok())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))?
        .parse()
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid number {}: {}", key, e)))
}

fn get_optional_string_list(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<Option<Vec<String>>, RepositoryError> {
    let Some(value) = item.get(key) else {
        return Ok(None);
    };
    let list = value
        .as_l()
        .map_err(|_| RepositoryError::InvalidData(format!("Field {} is not a list", key)))?;

    list.iter()
        .map(|v| {
            v.as_s().map(|s| s.to_string()).map_err(|_| {
                RepositoryError::InvalidData(format!("Field {} holds a non-string", key))
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

fn get_uuid(item: &HashMap<String, AttributeValue>, key: &str) -> Result<Uuid, RepositoryError> {
    let s = get_string(item, key)?;
    Uuid::parse_str(&s)
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid UUID {}: {}", key, e)))
}

fn get_datetime(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<DateTime<Utc>, RepositoryError> {
    let s = get_string(item, key)?;
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid datetime {}: {}", key, e)))
}
