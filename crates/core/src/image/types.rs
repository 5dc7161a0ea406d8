use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An image mirrored from the bucket (or saved as a favorite).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: i64,
    /// Public URL of the object.
    pub url: String,
    /// Display label, derived from the filename unless given explicitly.
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An image about to be written. The database assigns the id and timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewImage {
    pub url: String,
    pub description: String,
}

impl NewImage {
    pub fn new(url: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            description: description.into(),
        }
    }
}
