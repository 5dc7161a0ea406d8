//! caseforge_core - types and pure logic shared by the caseforge server and client.
//!
//! Nothing in this crate performs I/O. Storage, object storage and model
//! invocation are expressed as traits that the server crate implements.

pub mod feedback;
pub mod image;
pub mod inference;
pub mod objects;
pub mod storage;
pub mod validation;
