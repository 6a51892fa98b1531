//! GetStatsHandler - Query handler for aggregate statistics.

use std::sync::Arc;

use crate::domain::feedback::{FeedbackStats, StorageError};
use crate::ports::FeedbackStore;

/// Handler returning aggregate counts over the full record set.
pub struct GetStatsHandler {
    store: Arc<dyn FeedbackStore>,
}

impl GetStatsHandler {
    pub fn new(store: Arc<dyn FeedbackStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<FeedbackStats, StorageError> {
        self.store.stats().await
    }
}
