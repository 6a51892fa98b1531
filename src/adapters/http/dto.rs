//! Data transfer objects for the feedback HTTP endpoints.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::feedback::{FeedbackRecord, FeedbackStats, Sentiment};

// ═══════════════════════════════════════════════════════════════════════════
// Request DTOs
// ═══════════════════════════════════════════════════════════════════════════

/// Body of `POST /feedback`.
///
/// `name` is optional and defaults to "Anonymous" downstream; the remaining
/// fields are required and enforced by deserialization before any store
/// logic runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitFeedbackRequest {
    /// Submitter name
    #[serde(default)]
    pub name: Option<String>,
    /// Product the feedback is about
    pub product: String,
    /// Free-text feedback body (the classification input)
    pub feedback: String,
    /// Caller-supplied category, not validated against an enumeration
    pub category: String,
}

// ═══════════════════════════════════════════════════════════════════════════
// Response DTOs
// ═══════════════════════════════════════════════════════════════════════════

/// Body of `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

/// Body of a successful `POST /feedback`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitFeedbackResponse {
    pub message: String,
    pub sentiment: Sentiment,
}

/// One record in the `GET /feedback` array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackResponse {
    pub id: i64,
    pub name: String,
    pub product: String,
    pub feedback: String,
    pub category: String,
    pub sentiment: Sentiment,
}

impl From<&FeedbackRecord> for FeedbackResponse {
    fn from(record: &FeedbackRecord) -> Self {
        Self {
            id: record.id(),
            name: record.name().to_string(),
            product: record.product().to_string(),
            feedback: record.feedback().to_string(),
            category: record.category().to_string(),
            sentiment: record.sentiment(),
        }
    }
}

/// Body of `GET /stats`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total: u64,
    pub by_category: HashMap<String, u64>,
    pub by_sentiment: HashMap<String, u64>,
}

impl From<FeedbackStats> for StatsResponse {
    fn from(stats: FeedbackStats) -> Self {
        Self {
            total: stats.total,
            by_category: stats.by_category,
            by_sentiment: stats
                .by_sentiment
                .into_iter()
                .map(|(sentiment, count)| (sentiment.as_str().to_string(), count))
                .collect(),
        }
    }
}

/// Error envelope; detail is suppressed from the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
