//! Aggregate statistics over stored feedback.

use std::collections::HashMap;

use super::record::FeedbackRecord;
use super::sentiment::Sentiment;

/// Aggregate counts over the full record set.
///
/// `total` always equals the sum of `by_sentiment` counts, and equals the
/// sum of `by_category` counts when every record carries a non-empty
/// category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackStats {
    pub total: u64,
    pub by_category: HashMap<String, u64>,
    pub by_sentiment: HashMap<Sentiment, u64>,
}

impl FeedbackStats {
    /// Fold a record set into aggregate counts.
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a FeedbackRecord>) -> Self {
        let mut stats = FeedbackStats::default();
        for record in records {
            stats.total += 1;
            *stats
                .by_category
                .entry(record.category().to_string())
                .or_insert(0) += 1;
            *stats.by_sentiment.entry(record.sentiment()).or_insert(0) += 1;
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::feedback::{NewFeedback, SentimentClassifier};

    fn record(id: i64, body: &str, category: &str) -> FeedbackRecord {
        let classifier = SentimentClassifier::default();
        FeedbackRecord::from_new(
            id,
            NewFeedback::new(Some("Sam"), "app", body, category, &classifier),
        )
    }

    #[test]
    fn empty_record_set_yields_zero_stats() {
        let stats = FeedbackStats::from_records([]);
        assert_eq!(stats.total, 0);
        assert!(stats.by_category.is_empty());
        assert!(stats.by_sentiment.is_empty());
    }

    #[test]
    fn counts_by_category_and_sentiment() {
        let records = vec![
            record(1, "great app", "ui"),
            record(2, "broken login", "auth"),
            record(3, "meh", "ui"),
        ];
        let stats = FeedbackStats::from_records(&records);

        assert_eq!(stats.total, 3);
        assert_eq!(stats.by_category.get("ui"), Some(&2));
        assert_eq!(stats.by_category.get("auth"), Some(&1));
        assert_eq!(stats.by_sentiment.get(&Sentiment::Positive), Some(&1));
        assert_eq!(stats.by_sentiment.get(&Sentiment::Negative), Some(&1));
        assert_eq!(stats.by_sentiment.get(&Sentiment::Neutral), Some(&1));
    }

    #[test]
    fn total_equals_sum_of_sentiment_counts() {
        let records = vec![
            record(1, "love it", "ui"),
            record(2, "hate it", "ui"),
            record(3, "whatever", "misc"),
            record(4, "fast and smooth", "perf"),
        ];
        let stats = FeedbackStats::from_records(&records);

        assert_eq!(stats.total, stats.by_sentiment.values().sum::<u64>());
        assert_eq!(stats.total, stats.by_category.values().sum::<u64>());
    }
}
