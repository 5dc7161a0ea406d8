//! Object storage seam (the bucket holding case images).

mod error;
mod traits;

pub use error::ObjectStoreError;
pub use traits::ObjectStore;
