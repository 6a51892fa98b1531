//! Feedback record model.

use super::classifier::SentimentClassifier;
use super::sentiment::Sentiment;

/// Fallback submitter name for blank submissions.
const ANONYMOUS: &str = "Anonymous";

/// A feedback submission that has not been persisted yet.
///
/// Construction normalizes the submitter name (trimmed, defaulting to
/// "Anonymous" when blank) and computes the sentiment from the feedback body.
/// The sentiment is fixed here, at creation time; it is never recomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFeedback {
    name: String,
    product: String,
    feedback: String,
    category: String,
    sentiment: Sentiment,
}

impl NewFeedback {
    /// Build a new submission, classifying the feedback body.
    pub fn new(
        name: Option<&str>,
        product: impl Into<String>,
        feedback: impl Into<String>,
        category: impl Into<String>,
        classifier: &SentimentClassifier,
    ) -> Self {
        let trimmed = name.map(str::trim).unwrap_or("");
        let name = if trimmed.is_empty() {
            ANONYMOUS.to_string()
        } else {
            trimmed.to_string()
        };
        let feedback = feedback.into();
        let sentiment = classifier.classify(&feedback);

        Self {
            name,
            product: product.into(),
            feedback,
            category: category.into(),
            sentiment,
        }
    }

    /// Submitter name, never blank.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Product the feedback is about.
    pub fn product(&self) -> &str {
        &self.product
    }

    /// Free-text feedback body.
    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    /// Caller-supplied category.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Sentiment computed from the feedback body.
    pub fn sentiment(&self) -> Sentiment {
        self.sentiment
    }
}

/// A persisted feedback record.
///
/// Records are append-only: created once via submission, never updated or
/// deleted. The identifier is assigned by the store and is unique and
/// monotonically non-decreasing across successful commits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackRecord {
    id: i64,
    name: String,
    product: String,
    feedback: String,
    category: String,
    sentiment: Sentiment,
}

impl FeedbackRecord {
    /// Attach a store-assigned identifier to a submission.
    pub fn from_new(id: i64, new: NewFeedback) -> Self {
        Self {
            id,
            name: new.name,
            product: new.product,
            feedback: new.feedback,
            category: new.category,
            sentiment: new.sentiment,
        }
    }

    /// Rehydrate a record from stored fields. Used by store adapters when
    /// reading rows back; no normalization or classification is re-applied.
    pub fn rehydrate(
        id: i64,
        name: String,
        product: String,
        feedback: String,
        category: String,
        sentiment: Sentiment,
    ) -> Self {
        Self {
            id,
            name,
            product,
            feedback,
            category,
            sentiment,
        }
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Submitter name, never blank.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Product the feedback is about.
    pub fn product(&self) -> &str {
        &self.product
    }

    /// Free-text feedback body.
    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    /// Caller-supplied category.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Sentiment computed at creation time.
    pub fn sentiment(&self) -> Sentiment {
        self.sentiment
    }
}
