//! Keyword-based sentiment classifier.

use std::collections::HashSet;

use super::sentiment::Sentiment;
use super::vocabulary::Vocabulary;

/// Classifies feedback text into a [`Sentiment`] by keyword and phrase
/// matching.
///
/// Classification is a total function: every input, including the empty
/// string, yields a label. Checks run in a fixed tier order and the first
/// match wins:
///
/// 1. negative phrases (substring on cleaned text)
/// 2. positive phrases (substring on cleaned text)
/// 3. negative words (token set intersection)
/// 4. positive words (token set intersection)
/// 5. otherwise neutral
///
/// Phrase checks precede word checks and negative checks precede positive
/// checks in both tiers, so a text carrying both cues is flagged negative.
/// The tier order is observable behavior and must not be reordered.
#[derive(Debug, Clone)]
pub struct SentimentClassifier {
    vocabulary: Vocabulary,
}

impl SentimentClassifier {
    /// Create a classifier over an explicit vocabulary.
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// The vocabulary driving this classifier.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Classify a feedback body.
    pub fn classify(&self, text: &str) -> Sentiment {
        let cleaned = clean(text);

        // Phrases contain spaces, so they are matched by substring on the
        // cleaned text. Punctuation is already collapsed to spaces here,
        // which is what makes "well-done" match "well done".
        if self
            .vocabulary
            .negative_phrases()
            .iter()
            .any(|p| cleaned.contains(p.as_str()))
        {
            return Sentiment::Negative;
        }
        if self
            .vocabulary
            .positive_phrases()
            .iter()
            .any(|p| cleaned.contains(p.as_str()))
        {
            return Sentiment::Positive;
        }

        let tokens: HashSet<&str> = cleaned.split_whitespace().collect();
        if tokens
            .iter()
            .any(|t| self.vocabulary.negative_words().contains(*t))
        {
            return Sentiment::Negative;
        }
        if tokens
            .iter()
            .any(|t| self.vocabulary.positive_words().contains(*t))
        {
            return Sentiment::Positive;
        }

        Sentiment::Neutral
    }
}

impl Default for SentimentClassifier {
    fn default() -> Self {
        Self::new(Vocabulary::default())
    }
}

/// Lower-case the input and collapse every non-alphanumeric run to a single
/// space, leaving word/space content only.
fn clean(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;
    for c in text.chars() {
        if c.is_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.extend(c.to_lowercase());
        } else {
            pending_space = true;
        }
    }
    out
}
