//! Derivation of public URLs and display labels from object keys.

/// Returns true for zero-byte "folder" objects, whose keys end with `/`.
pub fn is_directory_marker(key: &str) -> bool {
    key.ends_with('/')
}

/// Derives a display label from an object key.
///
/// Takes the last path segment and cuts it at the first `.`, so
/// `cases/tower.v2.png` becomes `tower`.
pub fn label_from_key(key: &str) -> String {
    let filename = key.rsplit('/').next().unwrap_or(key);
    filename
        .split('.')
        .next()
        .unwrap_or(filename)
        .to_string()
}

/// Default public host for a bucket (virtual-hosted S3 addressing).
pub fn default_public_host(bucket: &str) -> String {
    format!("{bucket}.s3.amazonaws.com")
}

/// Builds the public URL of an object.
pub fn public_url(host: &str, key: &str) -> String {
    format!("https://{}/{}", host.trim_end_matches('/'), key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_marker() {
        assert!(is_directory_marker("coolermaster_images/"));
        assert!(!is_directory_marker("coolermaster_images/case.png"));
    }

    #[test]
    fn test_label_strips_folders_and_extension() {
        assert_eq!(label_from_key("coolermaster_images/mesh_front.jpg"), "mesh_front");
    }

    #[test]
    fn test_label_cuts_at_first_dot() {
        assert_eq!(label_from_key("a/b/tower.v2.final.png"), "tower");
    }

    #[test]
    fn test_label_without_extension() {
        assert_eq!(label_from_key("images/README"), "README");
        assert_eq!(label_from_key("plain"), "plain");
    }

    #[test]
    fn test_public_url_default_host() {
        let host = default_public_host("pccasepins");
        assert_eq!(
            public_url(&host, "coolermaster_images/a.png"),
            "https://pccasepins.s3.amazonaws.com/coolermaster_images/a.png"
        );
    }

    #[test]
    fn test_public_url_bucket_as_host() {
        assert_eq!(
            public_url("pccasepins/", "x/y.png"),
            "https://pccasepins/x/y.png"
        );
    }
}
