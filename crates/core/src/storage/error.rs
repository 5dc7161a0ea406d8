use thiserror::Error;

/// Failure of an image table or feedback store operation.
///
/// Backend errors (rusqlite, sqlx, DynamoDB) are folded into these variants so
/// handlers and the sync job never see driver types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// No row or item under the given key.
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    /// A uniqueness constraint rejected the write.
    #[error("{entity_type} already exists: {id}")]
    AlreadyExists {
        entity_type: &'static str,
        id: String,
    },
    /// Database or AWS endpoint unreachable.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// A stored row or item could not be read back into a record.
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
