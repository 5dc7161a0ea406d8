pub mod error;
pub mod feedback;
pub mod health;
pub mod images;
pub mod inference;

pub use error::AppError;
