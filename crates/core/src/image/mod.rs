mod naming;
mod requests;
mod sync;
mod types;

pub use naming::{default_public_host, is_directory_marker, label_from_key, public_url};
pub use requests::{DeleteFavoriteRequest, DeleteFavoriteResponse, SaveFavoriteRequest};
pub use sync::{plan_sync, SyncPlan};
pub use types::{ImageRecord, NewImage};
