//! Property tests for the sentiment classifier.

use feedback_collector::domain::feedback::{Sentiment, SentimentClassifier};
use proptest::prelude::*;

proptest! {
    /// Every input, however mangled, yields one of the three labels.
    #[test]
    fn classify_is_total(text in ".*") {
        let classifier = SentimentClassifier::default();
        let label = classifier.classify(&text);
        prop_assert!(matches!(
            label,
            Sentiment::Positive | Sentiment::Negative | Sentiment::Neutral
        ));
    }

    /// Repeated calls with the same input return the same label.
    #[test]
    fn classify_is_deterministic(text in ".*") {
        let classifier = SentimentClassifier::default();
        prop_assert_eq!(classifier.classify(&text), classifier.classify(&text));
    }

    /// Casing never changes the outcome.
    #[test]
    fn classify_ignores_ascii_case(text in "[a-zA-Z !?,\\.]{0,80}") {
        let classifier = SentimentClassifier::default();
        prop_assert_eq!(
            classifier.classify(&text),
            classifier.classify(&text.to_uppercase())
        );
    }

    /// Tokens built from letters absent in the vocabulary stay neutral.
    #[test]
    fn classify_is_neutral_without_vocabulary_overlap(
        words in proptest::collection::vec("[xyz]{1,8}", 0..8)
    ) {
        let text = words.join(" ");
        prop_assert_eq!(
            SentimentClassifier::default().classify(&text),
            Sentiment::Neutral
        );
    }

    /// Appending a negative keyword to any phrase-free positive text flips
    /// the word tiers toward negative.
    #[test]
    fn negative_word_wins_over_positive_word(filler in "[xyz ]{0,40}") {
        let text = format!("{} good broken", filler);
        prop_assert_eq!(
            SentimentClassifier::default().classify(&text),
            Sentiment::Negative
        );
    }
}
