//! MySQL error mapping.
//!
//! Maps `sqlx::Error` to `RepositoryError` from `caseforge_core::storage`.

use caseforge_core::storage::RepositoryError;

/// Maps a sqlx error to a RepositoryError.
///
/// # Error Mapping
///
/// - Unique key violations → `RepositoryError::AlreadyExists`
/// - Pool and transport errors → `RepositoryError::ConnectionFailed`
/// - `RowNotFound` → `RepositoryError::NotFound`
/// - Decode errors → `RepositoryError::InvalidData`
/// - All other errors → `RepositoryError::QueryFailed`
pub fn map_sqlx_error(err: sqlx::Error, entity_type: &'static str, id: &str) -> RepositoryError {
    match err {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            RepositoryError::AlreadyExists {
                entity_type,
                id: id.to_string(),
            }
        }
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::Configuration(_) => RepositoryError::ConnectionFailed(err.to_string()),
        sqlx::Error::RowNotFound => RepositoryError::NotFound {
            entity_type,
            id: id.to_string(),
        },
        sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::Decode(_) => RepositoryError::InvalidData(err.to_string()),
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let result = map_sqlx_error(sqlx::Error::RowNotFound, "Image", "https://b/x.png");

        assert_eq!(
            result,
            RepositoryError::NotFound {
                entity_type: "Image",
                id: "https://b/x.png".to_string(),
            }
        );
    }

    #[test]
    fn test_pool_timeout_maps_to_connection_failed() {
        let result = map_sqlx_error(sqlx::Error::PoolTimedOut, "Image", "");
        assert!(matches!(result, RepositoryError::ConnectionFailed(_)));
    }

    #[test]
    fn test_missing_column_maps_to_invalid_data() {
        let result = map_sqlx_error(
            sqlx::Error::ColumnNotFound("image_url".to_string()),
            "Image",
            "",
        );
        assert!(matches!(result, RepositoryError::InvalidData(_)));
    }

    #[test]
    fn test_protocol_error_maps_to_query_failed() {
        let result = map_sqlx_error(sqlx::Error::Protocol("bad packet".to_string()), "Image", "");
        assert!(matches!(result, RepositoryError::QueryFailed(_)));
    }
}
