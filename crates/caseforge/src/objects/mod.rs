//! Object storage backed by Amazon S3.

mod s3;

pub use s3::S3ObjectStore;
