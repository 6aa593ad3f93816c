//! Persian stopword set shared by the tokenizer and the phrase segmenter

use std::collections::HashSet;

/// Built-in Persian stopwords.
const DEFAULT_STOPWORDS: &[&str] = &[
    "و", "در", "به", "از", "که", "برای", "با", "را", "این", "آن",
    "اما", "یا", "یک", "هم", "تا", "بر", "بود", "نیز", "شود",
    "کرد", "کند", "می", "بین", "شد", "است", "های", "باشد",
];

/// Immutable set of stopwords.
///
/// Built once at start-up and shared read-only between extractors.
/// Entries and lookups are whitespace-trimmed, otherwise compared exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self::from_words(DEFAULT_STOPWORDS.iter().copied())
    }
}

impl StopwordSet {
    /// Build a set from an arbitrary word list
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_string())
            .filter(|w| !w.is_empty())
            .collect();

        Self { words }
    }

    /// An empty set (no filtering)
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Built-in list extended with `extra` and with `exclude` removed.
    pub fn with_overrides(extra: &[String], exclude: &[String]) -> Self {
        let mut set = Self::default();
        set.words.extend(
            extra
                .iter()
                .map(|w| w.trim().to_string())
                .filter(|w| !w.is_empty()),
        );
        for word in exclude {
            set.words.remove(word.trim());
        }
        set
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word.trim())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in sorted order, for display
    pub fn sorted(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.iter().map(|w| w.as_str()).collect();
        words.sort_unstable();
        words
    }
}
