//! SQLite storage backend implementation.
//!
//! Uses `rusqlite` for the queries and `tokio-rusqlite` to run them off the
//! async runtime.

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteRepository;
