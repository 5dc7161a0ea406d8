//! In-memory storage backend.
//!
//! Stores everything in collections behind `Arc<RwLock<_>>`. Used by the
//! `inmemory` feature and by tests; nothing is persisted.

mod repository;

pub use repository::{InMemoryFeedbackRepository, InMemoryImageRepository};
