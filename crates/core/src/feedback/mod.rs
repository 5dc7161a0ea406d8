mod requests;
mod types;

pub use requests::{FeedbackQuery, FeedbackRequest, StatusResponse};
pub use types::FeedbackRecord;
