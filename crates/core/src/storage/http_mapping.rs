//! HTTP status codes for repository failures.

use super::RepositoryError;

/// Status code a handler answers with when a repository call fails.
///
/// Unreachable backends give 503 so probes and clients can tell an outage
/// from a bad request. Unreadable stored data gives 400, and query or
/// serialization failures give 500.
///
/// ```
/// use caseforge_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::ConnectionFailed("refused".to_string());
/// assert_eq!(repository_error_to_status_code(&error), 503);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::AlreadyExists { .. } => 409,
        RepositoryError::ConnectionFailed(_) => 503,
        RepositoryError::InvalidData(_) => 400,
        RepositoryError::QueryFailed(_) | RepositoryError::Serialization(_) => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (
                RepositoryError::NotFound {
                    entity_type: "Image",
                    id: "7".to_string(),
                },
                404,
            ),
            (
                RepositoryError::AlreadyExists {
                    entity_type: "Image",
                    id: "7".to_string(),
                },
                409,
            ),
            (RepositoryError::ConnectionFailed("refused".to_string()), 503),
            (RepositoryError::QueryFailed("syntax".to_string()), 500),
            (RepositoryError::Serialization("tags".to_string()), 500),
            (RepositoryError::InvalidData("created_at".to_string()), 400),
        ];

        for (error, status) in cases {
            assert_eq!(repository_error_to_status_code(&error), status, "{error}");
        }
    }
}
