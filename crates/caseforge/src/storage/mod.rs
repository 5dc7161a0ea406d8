//! Storage backend implementations.
//!
//! This module provides concrete implementations of the repository traits
//! defined in `caseforge_core::storage`. Images are stored in the backend
//! selected at compile time. Feedback goes to DynamoDB, except under
//! `inmemory` where both stores stay in process.
//!
//! # Feature Flags
//!
//! - `sqlite` (default): SQLite image table using `rusqlite` and `tokio-rusqlite`
//! - `mysql`: MySQL / Aurora image table using `sqlx`
//! - `inmemory`: in-process image table and feedback store, nothing persisted
//!
//! These features are mutually exclusive.
//!
//! # Examples
//!
//! Build with MySQL:
//! ```bash
//! cargo build -p caseforge --no-default-features --features mysql
//! ```

#[cfg(all(feature = "sqlite", feature = "mysql"))]
compile_error!(
    "Features 'sqlite' and 'mysql' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(all(feature = "sqlite", feature = "inmemory"))]
compile_error!("Cannot enable both 'sqlite' and 'inmemory' storage features");

#[cfg(all(feature = "mysql", feature = "inmemory"))]
compile_error!("Cannot enable both 'mysql' and 'inmemory' storage features");

#[cfg(not(any(feature = "sqlite", feature = "mysql", feature = "inmemory")))]
compile_error!(
    "No storage backend selected. Enable 'sqlite', 'mysql' or 'inmemory'. \
    Example: cargo build -p caseforge --features sqlite"
);

#[cfg_attr(feature = "inmemory", allow(dead_code))]
pub mod dynamodb;

#[cfg(any(test, feature = "inmemory"))]
pub mod inmemory;

#[cfg(feature = "mysql")]
pub mod mysql;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(not(feature = "inmemory"))]
pub use dynamodb::DynamoDbFeedbackRepository;

#[cfg(any(test, feature = "inmemory"))]
pub use inmemory::{InMemoryFeedbackRepository, InMemoryImageRepository};

#[cfg(feature = "mysql")]
pub use mysql::MySqlRepository;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepository;
