//! ListFeedbackHandler - Query handler for reading all feedback.

use std::sync::Arc;

use crate::domain::feedback::{FeedbackRecord, StorageError};
use crate::ports::FeedbackStore;

/// Handler returning every stored feedback record.
pub struct ListFeedbackHandler {
    store: Arc<dyn FeedbackStore>,
}

impl ListFeedbackHandler {
    pub fn new(store: Arc<dyn FeedbackStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<Vec<FeedbackRecord>, StorageError> {
        self.store.list_all().await
    }
}
