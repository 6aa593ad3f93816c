//! Ranked keyword result structures shared by both extraction methods

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Extraction method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Tfidf,
    Rake,
}

impl Method {
    /// Parse a method selector. Matching is exact; anything else yields `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "tfidf" => Some(Method::Tfidf),
            "rake" => Some(Method::Rake),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Tfidf => "tfidf",
            Method::Rake => "rake",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// TF-IDF weight or RAKE phrase frequency. Serialized as a bare number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Score {
    Frequency(usize),
    Weight(f64),
}

impl Score {
    pub fn value(&self) -> f64 {
        match self {
            Score::Weight(w) => *w,
            Score::Frequency(n) => *n as f64,
        }
    }

    /// Render with `precision` decimals for weights; frequencies stay integral
    pub fn display(&self, precision: usize) -> String {
        match self {
            Score::Weight(w) => format!("{:.*}", precision, w),
            Score::Frequency(n) => n.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub term: String,
    pub score: Score,
}

impl Keyword {
    pub fn new(term: impl Into<String>, score: Score) -> Self {
        Self {
            term: term.into(),
            score,
        }
    }
}

/// Which part of the corpus a ranked result describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    Corpus,
    Document(usize),
}

/// Keywords sorted by descending score, capped by the caller's limit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    pub scope: Scope,
    pub entries: Vec<Keyword>,
}

impl RankedResult {
    pub fn empty(scope: Scope) -> Self {
        Self {
            scope,
            entries: Vec::new(),
        }
    }

    /// Stable descending sort of `entries`; equal scores keep their input order.
    pub fn ranked(scope: Scope, mut entries: Vec<Keyword>) -> Self {
        entries.sort_by(|a, b| {
            b.score
                .value()
                .partial_cmp(&a.score.value())
                .unwrap_or(Ordering::Equal)
        });
        Self { scope, entries }
    }

    pub fn truncate(mut self, limit: usize) -> Self {
        self.entries.truncate(limit);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn terms(&self) -> Vec<&str> {
        self.entries.iter().map(|k| k.term.as_str()).collect()
    }
}

/// Result of one extraction invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionOutput {
    /// `None` when the requested method was not recognized
    pub method: Option<Method>,
    pub corpus: RankedResult,
    pub documents: Vec<RankedResult>,
}

impl ExtractionOutput {
    pub fn empty(method: Option<Method>) -> Self {
        Self {
            method,
            corpus: RankedResult::empty(Scope::Corpus),
            documents: Vec::new(),
        }
    }

    pub fn corpus_keywords(&self) -> &[Keyword] {
        &self.corpus.entries
    }

    pub fn per_text_keywords(&self) -> Vec<&[Keyword]> {
        self.documents.iter().map(|r| r.entries.as_slice()).collect()
    }
}
