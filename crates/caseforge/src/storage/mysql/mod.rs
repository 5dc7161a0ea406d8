//! MySQL / Aurora storage backend implementation, built on a `sqlx` pool.

mod error;
mod repository;
mod schema;

pub use repository::MySqlRepository;
