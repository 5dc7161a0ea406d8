//! DynamoDB feedback store.
//!
//! Items live in one table keyed by `PK = IMAGE#<url>` and
//! `SK = FEEDBACK#<submitted_at>#<id>`.

mod conversions;
mod error;
mod keys;
mod repository;

pub use repository::DynamoDbFeedbackRepository;
