//! Application handlers.

mod get_stats;
mod list_feedback;
mod submit_feedback;

pub use get_stats::GetStatsHandler;
pub use list_feedback::ListFeedbackHandler;
pub use submit_feedback::{SubmitFeedbackCommand, SubmitFeedbackHandler};
