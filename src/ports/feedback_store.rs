//! Feedback store port.
//!
//! Defines the contract for persisting and reading feedback records. The
//! store is append-only: there is no update or delete operation.

use crate::domain::feedback::{FeedbackRecord, FeedbackStats, NewFeedback, StorageError};
use async_trait::async_trait;

/// Port for feedback persistence.
///
/// Implementations must ensure:
/// - Identifiers are unique and monotonically non-decreasing across
///   successful inserts.
/// - A failed insert leaves no partial record visible to subsequent reads.
/// - `list_all` ordering is stable for a given storage state within a
///   process run.
#[async_trait]
pub trait FeedbackStore: Send + Sync {
    /// Persist a new submission, assigning the next identifier.
    ///
    /// Returns the stored record including its assigned identifier.
    ///
    /// # Errors
    ///
    /// - `StorageError` on connection failure or constraint violation; the
    ///   operation is all-or-nothing.
    async fn insert(&self, feedback: NewFeedback) -> Result<FeedbackRecord, StorageError>;

    /// Read every stored record, id ascending.
    async fn list_all(&self) -> Result<Vec<FeedbackRecord>, StorageError>;

    /// Aggregate counts over the full record set.
    async fn stats(&self) -> Result<FeedbackStats, StorageError>;
}
