//! MySQL schema definitions and SQL query constants.

pub const CREATE_IMAGES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS images (
    id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
    image_url VARCHAR(512) NOT NULL,
    description TEXT,
    created_at DATETIME(6) NOT NULL,
    updated_at DATETIME(6) NOT NULL,
    UNIQUE KEY uq_images_image_url (image_url),
    KEY idx_images_created_at (created_at)
)
"#;

/// Columns of an `images` table that predates this schema.
pub const SELECT_IMAGE_COLUMNS: &str = r#"
SELECT CAST(COLUMN_NAME AS CHAR) AS column_name
FROM information_schema.COLUMNS
WHERE TABLE_SCHEMA = DATABASE() AND TABLE_NAME = 'images'
"#;

/// Number of unique indexes covering `image_url`.
pub const COUNT_UNIQUE_URL_INDEXES: &str = r#"
SELECT COUNT(*)
FROM information_schema.STATISTICS
WHERE TABLE_SCHEMA = DATABASE()
  AND TABLE_NAME = 'images'
  AND COLUMN_NAME = 'image_url'
  AND NON_UNIQUE = 0
"#;

pub const ADD_ID_COLUMN: &str =
    "ALTER TABLE images ADD COLUMN id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY FIRST";

pub const ADD_CREATED_AT_COLUMN: &str =
    "ALTER TABLE images ADD COLUMN created_at DATETIME(6) NOT NULL DEFAULT CURRENT_TIMESTAMP(6)";

pub const ADD_UPDATED_AT_COLUMN: &str =
    "ALTER TABLE images ADD COLUMN updated_at DATETIME(6) NOT NULL DEFAULT CURRENT_TIMESTAMP(6)";

/// Keeps the oldest row of each URL.
pub const DELETE_DUPLICATE_URLS: &str = r#"
DELETE newer FROM images newer
JOIN images older ON newer.image_url = older.image_url AND newer.id > older.id
"#;

pub const ADD_UNIQUE_URL: &str = r#"
ALTER TABLE images
    MODIFY image_url VARCHAR(512) NOT NULL,
    ADD UNIQUE KEY uq_images_image_url (image_url)
"#;

/// Statements bringing an existing `images` table up to this schema, in order.
///
/// A table created by [`CREATE_IMAGES_TABLE`] yields no statements, so the
/// plan is safe to run on every start.
pub fn plan_migration(columns: &[String], has_unique_url: bool) -> Vec<&'static str> {
    let has = |name: &str| columns.iter().any(|c| c.eq_ignore_ascii_case(name));
    let mut statements = Vec::new();

    if !has("id") {
        statements.push(ADD_ID_COLUMN);
    }
    if !has("created_at") {
        statements.push(ADD_CREATED_AT_COLUMN);
    }
    if !has("updated_at") {
        statements.push(ADD_UPDATED_AT_COLUMN);
    }
    if !has_unique_url {
        statements.push(DELETE_DUPLICATE_URLS);
        statements.push(ADD_UNIQUE_URL);
    }

    statements
}

pub const SELECT_IMAGES: &str = r#"
SELECT id, image_url, description, created_at, updated_at
FROM images
ORDER BY created_at DESC, id DESC
"#;

pub const SELECT_IMAGE_BY_URL: &str = r#"
SELECT id, image_url, description, created_at, updated_at
FROM images
WHERE image_url = ?
"#;

/// Insert, or refresh description and `updated_at` of the row with the same URL.
pub const UPSERT_IMAGE: &str = r#"
INSERT INTO images (image_url, description, created_at, updated_at)
VALUES (?, ?, ?, ?)
ON DUPLICATE KEY UPDATE
    description = VALUES(description),
    updated_at = VALUES(updated_at)
"#;

pub const DELETE_IMAGES_BY_URL: &str = "DELETE FROM images WHERE image_url = ?";

pub const PING: &str = "SELECT 1";

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_current_table_needs_nothing() {
        let current = columns(&["id", "image_url", "description", "created_at", "updated_at"]);
        assert!(plan_migration(&current, true).is_empty());
    }

    #[test]
    fn test_legacy_table_gets_timestamps_and_unique_url() {
        let legacy = columns(&["ID", "image_url", "description"]);

        assert_eq!(
            plan_migration(&legacy, false),
            vec![
                ADD_CREATED_AT_COLUMN,
                ADD_UPDATED_AT_COLUMN,
                DELETE_DUPLICATE_URLS,
                ADD_UNIQUE_URL,
            ]
        );
    }

    #[test]
    fn test_missing_id_is_added_before_deduplication() {
        let plan = plan_migration(&columns(&["image_url", "description"]), false);

        assert_eq!(plan.first(), Some(&ADD_ID_COLUMN));
        let add_id = plan.iter().position(|s| *s == ADD_ID_COLUMN);
        let dedupe = plan.iter().position(|s| *s == DELETE_DUPLICATE_URLS);
        assert!(add_id < dedupe);
    }
}
