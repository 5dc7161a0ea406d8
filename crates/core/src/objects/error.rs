use thiserror::Error;

/// Errors returned by an [`ObjectStore`](super::ObjectStore).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ObjectStoreError {
    #[error("Listing s3://{bucket}/{prefix} failed: {message}")]
    ListFailed {
        bucket: String,
        prefix: String,
        message: String,
    },
    #[error("Upload of s3://{bucket}/{key} failed: {message}")]
    PutFailed {
        bucket: String,
        key: String,
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_failed_display() {
        let error = ObjectStoreError::ListFailed {
            bucket: "pccasepins".to_string(),
            prefix: "coolermaster_images/".to_string(),
            message: "AccessDenied".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Listing s3://pccasepins/coolermaster_images/ failed: AccessDenied"
        );
    }
}
