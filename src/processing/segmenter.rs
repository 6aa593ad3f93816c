//! Sentence and stopword-delimited phrase segmentation

use crate::processing::stopwords::StopwordSet;
use regex::Regex;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Segmenter {
    stopwords: Arc<StopwordSet>,
    sentence_boundary: Regex,
    word_boundary: Regex,
}

impl Segmenter {
    pub fn new(stopwords: Arc<StopwordSet>) -> Self {
        // Period, exclamation mark, Persian question mark, newline
        let sentence_boundary = Regex::new(r"[.!؟\n]")
            .expect("Invalid sentence boundary regex");

        // Only letters, digits and underscore are word characters; combining
        // marks and the zero-width non-joiner separate words.
        let word_boundary = Regex::new(r"[^\p{L}\p{N}_]+")
            .expect("Invalid word boundary regex");

        Self {
            stopwords,
            sentence_boundary,
            word_boundary,
        }
    }

    /// Split text into trimmed, non-empty sentences
    pub fn split_sentences<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.sentence_boundary
            .split(text)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Split text into candidate phrases, in order of appearance.
    ///
    /// A phrase is a maximal run of consecutive non-stopword words inside one
    /// sentence, joined with single spaces.
    pub fn phrases(&self, text: &str) -> Vec<String> {
        let mut phrase_list = Vec::new();

        for sentence in self.split_sentences(text) {
            let mut phrase: Vec<&str> = Vec::new();

            for word in self.word_boundary.split(sentence) {
                let word = word.trim();
                if !word.is_empty() && !self.stopwords.contains(word) {
                    phrase.push(word);
                } else if !phrase.is_empty() {
                    phrase_list.push(phrase.join(" "));
                    phrase.clear();
                }
            }

            if !phrase.is_empty() {
                phrase_list.push(phrase.join(" "));
            }
        }

        phrase_list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segmenter() -> Segmenter {
        Segmenter::new(Arc::new(StopwordSet::default()))
    }

    #[test]
    fn test_sentence_splitting() {
        let sentences = segmenter().split_sentences("جمله اول. جمله دوم! آیا سوم است؟\nچهارم");
        assert_eq!(sentences, vec!["جمله اول", "جمله دوم", "آیا سوم است", "چهارم"]);
    }

    #[test]
    fn test_empty_sentences_are_discarded() {
        let sentences = segmenter().split_sentences("...\n\n  !  ");
        assert!(sentences.is_empty());
    }

    #[test]
    fn test_stopwords_delimit_phrases() {
        let phrases = segmenter().phrases("گربه سیاه روی دیوار نشسته بود");
        assert_eq!(phrases, vec!["گربه سیاه روی دیوار نشسته"]);

        let phrases = segmenter().phrases("کتاب خوب را در کتابخانه گذاشتم");
        assert_eq!(phrases, vec!["کتاب خوب", "کتابخانه گذاشتم"]);
    }

    #[test]
    fn test_phrases_do_not_cross_sentences() {
        let phrases = segmenter().phrases("باغ بزرگ. درخت سبز");
        assert_eq!(phrases, vec!["باغ بزرگ", "درخت سبز"]);
    }

    #[test]
    fn test_punctuation_does_not_break_phrase() {
        // Comma is a non-word run, not a stopword; the phrase continues
        let phrases = segmenter().phrases("باغ، درخت و گل");
        assert_eq!(phrases, vec!["باغ درخت", "گل"]);
    }

    #[test]
    fn test_zero_width_non_joiner_splits_words() {
        let phrases = segmenter().phrases("سگ قهوه\u{200C}ای زیر درخت");
        assert_eq!(phrases, vec!["سگ قهوه ای زیر درخت"]);
    }

    #[test]
    fn test_diacritics_split_words() {
        let phrases = segmenter().phrases("کتاب\u{0650} خوب");
        assert_eq!(phrases, vec!["کتاب خوب"]);
    }

    #[test]
    fn test_digits_and_underscore_are_word_characters() {
        let phrases = segmenter().phrases("سال ۱۴۰۲ نسخه_دوم");
        assert_eq!(phrases, vec!["سال ۱۴۰۲ نسخه_دوم"]);
    }

    #[test]
    fn test_duplicates_retained() {
        let phrases = segmenter().phrases("باغ سبز. باغ سبز");
        assert_eq!(phrases, vec!["باغ سبز", "باغ سبز"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(segmenter().phrases("").is_empty());
        assert!(segmenter().phrases("و در به").is_empty());
    }
}
