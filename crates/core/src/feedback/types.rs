use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored piece of user feedback on a generated or mirrored image.
///
/// `tags` and `comments` are kept exactly as submitted: an absent list stays
/// absent and an empty list stays empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub id: Uuid,
    pub image_url: String,
    pub rating: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

impl FeedbackRecord {
    /// Creates a record with a fresh id, stamped now at microsecond precision.
    pub fn new(image_url: impl Into<String>, rating: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            image_url: image_url.into(),
            rating,
            tags: None,
            comments: None,
            submitted_at: Utc::now().trunc_subsecs(6),
        }
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn with_comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = Some(comments.into());
        self
    }

    /// Sets a specific submission time (useful for testing).
    pub fn with_submitted_at(mut self, submitted_at: DateTime<Utc>) -> Self {
        self.submitted_at = submitted_at;
        self
    }
}
