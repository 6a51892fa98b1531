//! Feedback domain - records, sentiment classification, and statistics.

mod classifier;
mod errors;
mod record;
mod sentiment;
mod stats;
mod vocabulary;

pub use classifier::SentimentClassifier;
pub use errors::StorageError;
pub use record::{FeedbackRecord, NewFeedback};
pub use sentiment::{ParseSentimentError, Sentiment};
pub use stats::FeedbackStats;
pub use vocabulary::Vocabulary;
