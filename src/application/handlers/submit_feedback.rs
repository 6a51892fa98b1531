//! SubmitFeedbackHandler - Command handler for feedback submission.

use std::sync::Arc;

use crate::domain::feedback::{FeedbackRecord, NewFeedback, SentimentClassifier, StorageError};
use crate::ports::FeedbackStore;

/// Command to submit a piece of feedback.
#[derive(Debug, Clone)]
pub struct SubmitFeedbackCommand {
    pub name: Option<String>,
    pub product: String,
    pub feedback: String,
    pub category: String,
}

/// Handler for feedback submission.
///
/// Normalizes the submission, classifies its sentiment, and persists it.
pub struct SubmitFeedbackHandler {
    store: Arc<dyn FeedbackStore>,
    classifier: Arc<SentimentClassifier>,
}

impl SubmitFeedbackHandler {
    pub fn new(store: Arc<dyn FeedbackStore>, classifier: Arc<SentimentClassifier>) -> Self {
        Self { store, classifier }
    }

    pub async fn handle(
        &self,
        cmd: SubmitFeedbackCommand,
    ) -> Result<FeedbackRecord, StorageError> {
        let submission = NewFeedback::new(
            cmd.name.as_deref(),
            cmd.product,
            cmd.feedback,
            cmd.category,
            &self.classifier,
        );

        let record = self.store.insert(submission).await?;

        tracing::info!(
            id = record.id(),
            sentiment = %record.sentiment(),
            category = record.category(),
            "feedback stored"
        );

        Ok(record)
    }
}
