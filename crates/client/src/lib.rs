//! caseforge_client - CLI client for the caseforge API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::CaseforgeClient;
pub use error::{ClientError, Result};
