//! Planning of a bucket-to-table sync.

use std::collections::HashSet;

use super::naming::{is_directory_marker, label_from_key, public_url};
use super::types::NewImage;

/// The rows a sync run should write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncPlan {
    /// One image per distinct object, in listing order.
    pub images: Vec<NewImage>,
    /// Directory markers left out of the plan.
    pub skipped: usize,
}

/// Turns a bucket listing into the images to upsert.
pub fn plan_sync<S: AsRef<str>>(keys: &[S], public_host: &str) -> SyncPlan {
    let mut seen = HashSet::new();
    let mut plan = SyncPlan::default();

    for key in keys {
        let key = key.as_ref();
        if is_directory_marker(key) {
            plan.skipped += 1;
            continue;
        }
        if !seen.insert(key) {
            continue;
        }
        plan.images.push(NewImage::new(
            public_url(public_host, key),
            label_from_key(key),
        ));
    }

    plan
}
