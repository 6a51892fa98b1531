//! In-memory implementation of FeedbackStore.
//!
//! Backs tests and local development. Same contract as the PostgreSQL
//! store: append-only, unique monotonically increasing ids, stable read
//! order.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::feedback::{FeedbackRecord, FeedbackStats, NewFeedback, StorageError};
use crate::ports::FeedbackStore;

#[derive(Debug, Default)]
struct Inner {
    records: Vec<FeedbackRecord>,
    next_id: i64,
}

/// In-memory implementation of FeedbackStore.
#[derive(Debug, Default)]
pub struct InMemoryFeedbackStore {
    inner: Mutex<Inner>,
}

impl InMemoryFeedbackStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.inner.lock().expect("store lock poisoned").records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl FeedbackStore for InMemoryFeedbackStore {
    async fn insert(&self, feedback: NewFeedback) -> Result<FeedbackRecord, StorageError> {
        let mut inner = self.inner.lock().expect("store lock poisoned");
        inner.next_id += 1;
        let record = FeedbackRecord::from_new(inner.next_id, feedback);
        inner.records.push(record.clone());
        Ok(record)
    }

    async fn list_all(&self) -> Result<Vec<FeedbackRecord>, StorageError> {
        let inner = self.inner.lock().expect("store lock poisoned");
        Ok(inner.records.clone())
    }

    async fn stats(&self) -> Result<FeedbackStats, StorageError> {
        let inner = self.inner.lock().expect("store lock poisoned");
        Ok(FeedbackStats::from_records(&inner.records))
    }
}
