//! SQLite schema definitions and SQL query constants.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
-- Images mirrored from the bucket or saved as favorites
CREATE TABLE IF NOT EXISTS images (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    image_url TEXT NOT NULL UNIQUE,
    description TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_images_created_at ON images(created_at);
"#;

pub const SELECT_IMAGES: &str = r#"
SELECT id, image_url, description, created_at, updated_at
FROM images
ORDER BY created_at DESC, id DESC
"#;

/// Insert, or refresh description and `updated_at` of the row with the same URL.
pub const UPSERT_IMAGE: &str = r#"
INSERT INTO images (image_url, description, created_at, updated_at)
VALUES (?1, ?2, ?3, ?3)
ON CONFLICT(image_url) DO UPDATE SET
    description = excluded.description,
    updated_at = excluded.updated_at
RETURNING id, image_url, description, created_at, updated_at
"#;

pub const DELETE_IMAGES_BY_URL: &str = r#"
DELETE FROM images WHERE image_url = ?1
"#;

pub const PING: &str = "SELECT 1";
