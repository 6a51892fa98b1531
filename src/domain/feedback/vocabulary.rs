//! Keyword vocabulary driving sentiment classification.

use std::collections::HashSet;

/// Built-in negative multi-word phrases, matched by substring.
const NEGATIVE_PHRASES: &[&str] = &["not working"];

/// Built-in positive multi-word phrases, matched by substring.
const POSITIVE_PHRASES: &[&str] = &["well done", "very helpful"];

/// Built-in negative single-word keywords.
const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "poor",
    "hate",
    "bug",
    "issue",
    "problem",
    "slow",
    "difficult",
    "error",
    "delay",
    "crash",
    "negative",
    "worst",
    "disappointed",
    "fail",
    "unsatisfied",
    "confusing",
    "messy",
    "unusable",
    "lag",
    "unhelpful",
    "annoying",
    "broken",
];

/// Built-in positive single-word keywords.
const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "love",
    "excellent",
    "awesome",
    "nice",
    "fantastic",
    "superb",
    "amazing",
    "improved",
    "satisfied",
    "helpful",
    "smooth",
    "fast",
    "positive",
    "brilliant",
    "wonderful",
    "perfect",
    "liked",
    "appreciate",
    "convenient",
    "happy",
    "clean",
];

/// Immutable keyword configuration for the sentiment classifier.
///
/// Holds two phrase sets (multi-word, matched by substring on cleaned text)
/// and two word sets (single tokens, matched against the token set of the
/// input). Each set is independently extensible through [`Vocabulary::new`]
/// without touching the classification algorithm.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    negative_phrases: Vec<String>,
    positive_phrases: Vec<String>,
    negative_words: HashSet<String>,
    positive_words: HashSet<String>,
}

impl Vocabulary {
    /// Build a vocabulary from explicit phrase and word sets.
    ///
    /// Entries are lower-cased on the way in so matching against cleaned
    /// (lower-cased) input text is consistent.
    pub fn new<I, S>(
        negative_phrases: I,
        positive_phrases: I,
        negative_words: I,
        positive_words: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        fn lowered<I, S>(entries: I) -> impl Iterator<Item = String>
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            entries.into_iter().map(|e| e.into().to_lowercase())
        }

        Self {
            negative_phrases: lowered(negative_phrases).collect(),
            positive_phrases: lowered(positive_phrases).collect(),
            negative_words: lowered(negative_words).collect(),
            positive_words: lowered(positive_words).collect(),
        }
    }

    /// Negative multi-word phrases.
    pub fn negative_phrases(&self) -> &[String] {
        &self.negative_phrases
    }

    /// Positive multi-word phrases.
    pub fn positive_phrases(&self) -> &[String] {
        &self.positive_phrases
    }

    /// Negative single-word keywords.
    pub fn negative_words(&self) -> &HashSet<String> {
        &self.negative_words
    }

    /// Positive single-word keywords.
    pub fn positive_words(&self) -> &HashSet<String> {
        &self.positive_words
    }
}

impl Default for Vocabulary {
    /// The built-in keyword lists.
    fn default() -> Self {
        Self::new(
            NEGATIVE_PHRASES.iter().copied(),
            POSITIVE_PHRASES.iter().copied(),
            NEGATIVE_WORDS.iter().copied(),
            POSITIVE_WORDS.iter().copied(),
        )
    }
}
