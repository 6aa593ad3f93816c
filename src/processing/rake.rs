//! RAKE-style phrase extraction.
//!
//! Phrases are ranked by how often they occur in the document. There is no
//! word co-occurrence or degree scoring.

use crate::processing::keywords::{Keyword, RankedResult, Score, Scope};
use crate::processing::segmenter::Segmenter;
use indexmap::IndexMap;
use log::debug;

pub const DEFAULT_MIN_CHAR_LENGTH: usize = 2;
pub const DEFAULT_MIN_KEYWORD_FREQ: usize = 1;

pub struct RakeExtractor {
    segmenter: Segmenter,
    min_char_length: usize,
    min_keyword_freq: usize,
}

impl RakeExtractor {
    pub fn new(segmenter: Segmenter) -> Self {
        Self {
            segmenter,
            min_char_length: DEFAULT_MIN_CHAR_LENGTH,
            min_keyword_freq: DEFAULT_MIN_KEYWORD_FREQ,
        }
    }

    pub fn with_thresholds(mut self, min_char_length: usize, min_keyword_freq: usize) -> Self {
        self.min_char_length = min_char_length;
        self.min_keyword_freq = min_keyword_freq;
        self
    }

    /// Rank phrases of one document by frequency.
    ///
    /// The result is not truncated; callers apply their own limit.
    pub fn extract(&self, text: &str, scope: Scope) -> RankedResult {
        let phrases = self.segmenter.phrases(text);
        let counts = self.phrase_frequencies(&phrases);

        debug!(
            "RAKE: {} phrases, {} distinct above length threshold",
            phrases.len(),
            counts.len()
        );

        let entries = counts
            .into_iter()
            .filter(|(_, freq)| *freq >= self.min_keyword_freq)
            .map(|(phrase, freq)| Keyword::new(phrase, Score::Frequency(freq)))
            .collect();

        RankedResult::ranked(scope, entries)
    }

    /// Occurrence count per distinct phrase, in first-occurrence order
    pub fn phrase_frequencies(&self, phrases: &[String]) -> IndexMap<String, usize> {
        let mut freq = IndexMap::new();
        for phrase in phrases {
            if phrase.chars().count() >= self.min_char_length {
                *freq.entry(phrase.clone()).or_insert(0) += 1;
            }
        }
        freq
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::stopwords::StopwordSet;
    use std::sync::Arc;

    fn extractor() -> RakeExtractor {
        RakeExtractor::new(Segmenter::new(Arc::new(StopwordSet::default())))
    }

    #[test]
    fn test_frequency_ranking() {
        let text = "باغ سبز. کتاب خوب. باغ سبز. باغ سبز. کتاب خوب. درخت";
        let result = extractor().extract(text, Scope::Document(0));

        assert_eq!(result.terms(), vec!["باغ سبز", "کتاب خوب", "درخت"]);
        assert_eq!(result.entries[0].score, Score::Frequency(3));
        assert_eq!(result.entries[1].score, Score::Frequency(2));
        assert_eq!(result.entries[2].score, Score::Frequency(1));
    }

    #[test]
    fn test_ties_keep_first_occurrence_order() {
        let result = extractor().extract("درخت. گل. باغ", Scope::Document(0));
        assert_eq!(result.terms(), vec!["درخت", "گل", "باغ"]);
    }

    #[test]
    fn test_min_char_length() {
        // Single-letter phrase "ب" is below the default threshold of 2
        let result = extractor().extract("ب. گل", Scope::Document(0));
        assert_eq!(result.terms(), vec!["گل"]);

        let strict = extractor().with_thresholds(4, 1);
        let result = strict.extract("گل. درخت", Scope::Document(0));
        assert_eq!(result.terms(), vec!["درخت"]);
    }

    #[test]
    fn test_min_keyword_freq() {
        let strict = extractor().with_thresholds(2, 2);
        let result = strict.extract("باغ سبز. درخت. باغ سبز", Scope::Document(0));

        assert_eq!(result.terms(), vec!["باغ سبز"]);
    }

    #[test]
    fn test_stopword_only_text() {
        let result = extractor().extract("و در به از", Scope::Document(0));
        assert!(result.is_empty());
    }

    #[test]
    fn test_empty_text() {
        let result = extractor().extract("", Scope::Document(3));
        assert!(result.is_empty());
        assert_eq!(result.scope, Scope::Document(3));
    }

    #[test]
    fn test_zero_width_non_joiner_phrase_key() {
        let text = "سگ قهوه\u{200C}ای زیر درخت خوابیده بود";
        let result = extractor().extract(text, Scope::Document(0));
        assert_eq!(result.terms(), vec!["سگ قهوه ای زیر درخت خوابیده"]);
    }

    #[test]
    fn test_not_truncated() {
        let text = "الف ب. پت ث. جچ ح. خد ذ. رز ژ. سش ص. ضط ظ";
        let result = extractor().extract(text, Scope::Document(0));
        assert_eq!(result.len(), 7);
    }
}
