//! Keyword extraction entry point: method selection and request parsing

use crate::config::ExtractionConfig;
use crate::processing::keywords::{ExtractionOutput, Method, RankedResult, Scope};
use crate::processing::rake::RakeExtractor;
use crate::processing::segmenter::Segmenter;
use crate::processing::stopwords::StopwordSet;
use crate::processing::tfidf::TfidfExtractor;
use crate::processing::tokenizer::Tokenizer;
use log::{debug, info, warn};
use std::sync::Arc;

/// Keyword count used when the requested one is missing or invalid
pub const DEFAULT_KEYWORD_COUNT: usize = 5;

/// Parse a requested keyword count, falling back to the default when the
/// value is missing, non-numeric or below 1. Counts too large for `usize`
/// saturate to `usize::MAX`.
pub fn parse_count(value: Option<&str>) -> usize {
    let Some(value) = value.map(str::trim) else {
        return DEFAULT_KEYWORD_COUNT;
    };

    match value.parse::<usize>() {
        Ok(n) if n >= 1 => n,
        Ok(_) => DEFAULT_KEYWORD_COUNT,
        Err(_) if is_unsigned_integer(value) => usize::MAX,
        Err(_) => DEFAULT_KEYWORD_COUNT,
    }
}

fn is_unsigned_integer(value: &str) -> bool {
    let digits = value.strip_prefix('+').unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Split raw input into documents: one per non-empty trimmed line
pub fn split_documents(input: &str) -> Vec<String> {
    input
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// A parsed extraction request
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionRequest {
    pub documents: Vec<String>,
    /// `None` for an unrecognized method, which makes the request a no-op
    pub method: Option<Method>,
    pub count: usize,
}

impl ExtractionRequest {
    /// Build a request from raw form-style values
    pub fn from_raw(input: &str, method: &str, count: Option<&str>) -> Self {
        let parsed = Method::parse(method);
        if parsed.is_none() {
            warn!("Unrecognized extraction method '{}'; returning no keywords", method);
        }

        Self {
            documents: split_documents(input),
            method: parsed,
            count: parse_count(count),
        }
    }
}

/// Runs TF-IDF or RAKE extraction over a batch of documents.
///
/// Holds only read-only state, so one instance can serve concurrent callers.
pub struct KeywordExtractor {
    tfidf: TfidfExtractor,
    rake: RakeExtractor,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new(Arc::new(StopwordSet::default()))
    }
}

impl KeywordExtractor {
    pub fn new(stopwords: Arc<StopwordSet>) -> Self {
        Self {
            tfidf: TfidfExtractor::new(Tokenizer::new(stopwords.clone())),
            rake: RakeExtractor::new(Segmenter::new(stopwords)),
        }
    }

    pub fn from_config(config: &ExtractionConfig, stopwords: Arc<StopwordSet>) -> Self {
        let tokenizer =
            Tokenizer::new(stopwords.clone()).with_min_token_chars(config.min_token_chars);
        let rake = RakeExtractor::new(Segmenter::new(stopwords))
            .with_thresholds(config.min_char_length, config.min_keyword_freq);

        Self {
            tfidf: TfidfExtractor::new(tokenizer),
            rake,
        }
    }

    /// Extract keywords for `request`. Pure: the same request always yields
    /// the same output.
    pub fn extract(&self, request: &ExtractionRequest) -> ExtractionOutput {
        let Some(method) = request.method else {
            return ExtractionOutput::empty(None);
        };

        if request.documents.is_empty() {
            debug!("No documents to process");
            return ExtractionOutput::empty(Some(method));
        }

        let limit = request.count.max(1);
        info!(
            "Extracting up to {} keywords from {} documents using {}",
            limit,
            request.documents.len(),
            method
        );

        match method {
            Method::Tfidf => {
                let keywords = self.tfidf.extract(&request.documents, limit);
                ExtractionOutput {
                    method: Some(method),
                    corpus: keywords.corpus,
                    documents: keywords.documents,
                }
            }
            Method::Rake => ExtractionOutput {
                method: Some(method),
                corpus: RankedResult::empty(Scope::Corpus),
                documents: request
                    .documents
                    .iter()
                    .enumerate()
                    .map(|(i, doc)| self.rake.extract(doc, Scope::Document(i)).truncate(limit))
                    .collect(),
            },
        }
    }

    /// Parse raw input and extract in one step
    pub fn extract_raw(&self, input: &str, method: &str, count: Option<&str>) -> ExtractionOutput {
        self.extract(&ExtractionRequest::from_raw(input, method, count))
    }
}
