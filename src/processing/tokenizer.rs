//! Persian word tokenization

use crate::processing::stopwords::StopwordSet;
use regex::Regex;
use std::sync::Arc;

/// Tokens shorter than this many characters are dropped.
pub const DEFAULT_MIN_TOKEN_CHARS: usize = 3;

/// Splits text into candidate keyword tokens.
///
/// Every character outside the Arabic block (U+0600..U+06FF) that is not
/// whitespace becomes a separator, so punctuation, digits, Latin letters and
/// the zero-width non-joiner all break words. Stopwords and short tokens are
/// dropped; order and duplicates are kept.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    stopwords: Arc<StopwordSet>,
    script_filter: Regex,
    min_token_chars: usize,
}

impl Tokenizer {
    pub fn new(stopwords: Arc<StopwordSet>) -> Self {
        let script_filter = Regex::new(r"[^\x{0600}-\x{06FF}\s]")
            .expect("Invalid script filter regex");

        Self {
            stopwords,
            script_filter,
            min_token_chars: DEFAULT_MIN_TOKEN_CHARS,
        }
    }

    pub fn with_min_token_chars(mut self, min_token_chars: usize) -> Self {
        self.min_token_chars = min_token_chars;
        self
    }

    /// Tokenize text into keyword candidates
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let filtered = self.script_filter.replace_all(text, " ");

        filtered
            .split_whitespace()
            .filter(|word| !self.stopwords.contains(word))
            .filter(|word| word.chars().count() >= self.min_token_chars)
            .map(str::to_string)
            .collect()
    }
}
