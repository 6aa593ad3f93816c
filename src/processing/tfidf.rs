//! Corpus-level TF-IDF keyword extraction
//!
//! The vectorization runs as four explicit steps so each one can be inspected
//! in isolation:
//!
//! 1. tokenize every document,
//! 2. build the vocabulary in first-occurrence order,
//! 3. count term and document frequencies,
//! 4. weight by smoothed IDF and L2-normalize each document row.
//!
//! IDF is `ln((1 + N) / (1 + df)) + 1`. Rows are scaled to unit Euclidean
//! length, which leaves the ranking inside a single document unchanged.

use crate::processing::keywords::{Keyword, RankedResult, Score, Scope};
use crate::processing::tokenizer::Tokenizer;
use indexmap::IndexMap;
use log::debug;
use std::collections::BTreeMap;

/// Term → document frequency, in first-occurrence order
pub type Vocabulary = IndexMap<String, usize>;

/// Sparse document-term weight matrix.
///
/// Row entries are keyed by vocabulary index; absent entries are zero.
#[derive(Debug, Clone, PartialEq)]
pub struct TfidfMatrix {
    pub vocabulary: Vocabulary,
    pub idf: Vec<f64>,
    pub rows: Vec<BTreeMap<usize, f64>>,
}

impl TfidfMatrix {
    pub fn term(&self, index: usize) -> Option<&str> {
        self.vocabulary.get_index(index).map(|(term, _)| term.as_str())
    }

    pub fn weight(&self, document: usize, term: &str) -> f64 {
        self.vocabulary
            .get_index_of(term)
            .and_then(|idx| self.rows.get(document)?.get(&idx).copied())
            .unwrap_or(0.0)
    }

    /// Column means over all rows; absent entries count as zero.
    pub fn column_means(&self) -> Vec<f64> {
        let mut sums = vec![0.0; self.vocabulary.len()];
        for row in &self.rows {
            for (&idx, &weight) in row {
                sums[idx] += weight;
            }
        }

        let n = self.rows.len().max(1) as f64;
        sums.into_iter().map(|s| s / n).collect()
    }
}

/// Both scopes of a TF-IDF extraction
#[derive(Debug, Clone, PartialEq)]
pub struct TfidfKeywords {
    pub corpus: RankedResult,
    pub documents: Vec<RankedResult>,
}

pub struct TfidfExtractor {
    tokenizer: Tokenizer,
}

impl TfidfExtractor {
    pub fn new(tokenizer: Tokenizer) -> Self {
        Self { tokenizer }
    }

    /// Rank terms for the whole corpus and for every document, keeping the
    /// top `limit` in each scope.
    pub fn extract(&self, documents: &[String], limit: usize) -> TfidfKeywords {
        let matrix = self.fit_transform(documents);

        if matrix.vocabulary.is_empty() {
            debug!("TF-IDF vocabulary is empty; nothing to rank");
            return TfidfKeywords {
                corpus: RankedResult::empty(Scope::Corpus),
                documents: (0..documents.len())
                    .map(|i| RankedResult::empty(Scope::Document(i)))
                    .collect(),
            };
        }

        let corpus_entries = matrix
            .column_means()
            .into_iter()
            .zip(matrix.vocabulary.keys())
            .map(|(mean, term)| Keyword::new(term.as_str(), Score::Weight(mean)))
            .collect();
        let corpus = RankedResult::ranked(Scope::Corpus, corpus_entries).truncate(limit);

        let documents = matrix
            .rows
            .iter()
            .enumerate()
            .map(|(doc_idx, row)| {
                // BTreeMap iteration follows vocabulary order, which the
                // stable sort keeps for ties.
                let entries = row
                    .iter()
                    .filter(|(_, weight)| **weight > 0.0)
                    .filter_map(|(&idx, &weight)| {
                        matrix
                            .term(idx)
                            .map(|term| Keyword::new(term, Score::Weight(weight)))
                    })
                    .collect();
                RankedResult::ranked(Scope::Document(doc_idx), entries).truncate(limit)
            })
            .collect();

        TfidfKeywords { corpus, documents }
    }

    /// Build the L2-normalized TF-IDF matrix for `documents`
    pub fn fit_transform(&self, documents: &[String]) -> TfidfMatrix {
        let tokenized: Vec<Vec<String>> = documents
            .iter()
            .map(|doc| self.tokenizer.tokenize(doc))
            .collect();

        let vocabulary = build_vocabulary(&tokenized);
        let idf = inverse_document_frequencies(&vocabulary, documents.len());

        let rows = tokenized
            .iter()
            .map(|tokens| {
                let mut row: BTreeMap<usize, f64> = term_frequencies(tokens, &vocabulary)
                    .into_iter()
                    .map(|(idx, tf)| (idx, tf as f64 * idf[idx]))
                    .collect();
                l2_normalize(&mut row);
                row
            })
            .collect();

        debug!(
            "TF-IDF matrix built: {} documents, {} terms",
            documents.len(),
            vocabulary.len()
        );

        TfidfMatrix {
            vocabulary,
            idf,
            rows,
        }
    }
}

/// Set-union of all tokens in first-occurrence order, with document frequencies
pub fn build_vocabulary(tokenized: &[Vec<String>]) -> Vocabulary {
    let mut vocabulary = Vocabulary::new();

    for tokens in tokenized {
        let mut seen_in_doc = std::collections::HashSet::new();
        for token in tokens {
            if seen_in_doc.insert(token.as_str()) {
                *vocabulary.entry(token.clone()).or_insert(0) += 1;
            }
        }
    }

    vocabulary
}

/// Raw occurrence counts keyed by vocabulary index
pub fn term_frequencies(tokens: &[String], vocabulary: &Vocabulary) -> BTreeMap<usize, usize> {
    let mut counts = BTreeMap::new();
    for token in tokens {
        if let Some(idx) = vocabulary.get_index_of(token.as_str()) {
            *counts.entry(idx).or_insert(0) += 1;
        }
    }
    counts
}

/// Smoothed IDF per vocabulary entry; rarer terms score higher
pub fn inverse_document_frequencies(vocabulary: &Vocabulary, n_documents: usize) -> Vec<f64> {
    let n = n_documents as f64;
    vocabulary
        .values()
        .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
        .collect()
}

fn l2_normalize(row: &mut BTreeMap<usize, f64>) {
    let norm = row.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for weight in row.values_mut() {
            *weight /= norm;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::stopwords::StopwordSet;
    use std::sync::Arc;

    fn extractor() -> TfidfExtractor {
        TfidfExtractor::new(Tokenizer::new(Arc::new(StopwordSet::default())))
    }

    fn docs(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_vocabulary_first_occurrence_order() {
        let tokenized = vec![
            vec!["درخت".to_string(), "باغ".to_string(), "درخت".to_string()],
            vec!["گربه".to_string(), "باغ".to_string()],
        ];

        let vocabulary = build_vocabulary(&tokenized);

        let terms: Vec<&str> = vocabulary.keys().map(|k| k.as_str()).collect();
        assert_eq!(terms, vec!["درخت", "باغ", "گربه"]);
        assert_eq!(vocabulary["درخت"], 1);
        assert_eq!(vocabulary["باغ"], 2);
        assert_eq!(vocabulary["گربه"], 1);
    }

    #[test]
    fn test_term_frequencies() {
        let tokens = vec!["درخت".to_string(), "باغ".to_string(), "درخت".to_string()];
        let vocabulary = build_vocabulary(&[tokens.clone()]);

        let tf = term_frequencies(&tokens, &vocabulary);
        assert_eq!(tf.get(&0), Some(&2));
        assert_eq!(tf.get(&1), Some(&1));
    }

    #[test]
    fn test_idf_rarer_terms_score_higher() {
        let tokenized = vec![
            vec!["درخت".to_string(), "باغ".to_string()],
            vec!["باغ".to_string()],
            vec!["باغ".to_string()],
        ];
        let vocabulary = build_vocabulary(&tokenized);
        let idf = inverse_document_frequencies(&vocabulary, 3);

        assert!(idf[0] > idf[1]);
        // A term in every document still gets the +1 floor
        assert!((idf[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_rows_are_unit_length() {
        let matrix = extractor().fit_transform(&docs(&[
            "درخت باغ درخت گربه",
            "کتاب مدرسه",
        ]));

        for row in &matrix.rows {
            let norm: f64 = row.values().map(|w| w * w).sum::<f64>().sqrt();
            assert!((norm - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_frequent_term_ranks_first_in_document() {
        let result = extractor().extract(&docs(&["درخت باغ درخت گربه درخت"]), 5);

        assert_eq!(result.documents.len(), 1);
        assert_eq!(result.documents[0].entries[0].term, "درخت");
    }

    #[test]
    fn test_distinctive_term_outranks_shared_term() {
        let result = extractor().extract(
            &docs(&["کتاب مدرسه", "کتاب خانه", "کتاب باغچه"]),
            5,
        );

        // "کتاب" appears everywhere, so each document's own term leads
        assert_eq!(result.documents[0].entries[0].term, "مدرسه");
        assert_eq!(result.documents[1].entries[0].term, "خانه");
        assert_eq!(result.documents[2].entries[0].term, "باغچه");
    }

    #[test]
    fn test_ties_follow_vocabulary_order() {
        let result = extractor().extract(&docs(&["مدرسه کتاب خانه"]), 5);
        assert_eq!(result.documents[0].terms(), vec!["مدرسه", "کتاب", "خانه"]);
        assert_eq!(result.corpus.terms(), vec!["مدرسه", "کتاب", "خانه"]);
    }

    #[test]
    fn test_corpus_mean_counts_absent_documents_as_zero() {
        let documents = docs(&["درخت باغچه", "کتاب"]);
        let matrix = extractor().fit_transform(&documents);
        let means = matrix.column_means();

        let idx = matrix.vocabulary.get_index_of("کتاب").unwrap();
        assert!((means[idx] - matrix.weight(1, "کتاب") / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_limit_applies_to_both_scopes() {
        let result = extractor().extract(
            &docs(&["درخت باغچه گربه کتاب مدرسه خانه", "دیوار پنجره"]),
            3,
        );

        assert!(result.corpus.len() <= 3);
        for doc in &result.documents {
            assert!(doc.len() <= 3);
        }
    }

    #[test]
    fn test_empty_vocabulary() {
        let result = extractor().extract(&docs(&["و در به", "123 abc"]), 5);

        assert!(result.corpus.is_empty());
        assert_eq!(result.documents.len(), 2);
        assert!(result.documents.iter().all(|d| d.is_empty()));
    }

    #[test]
    fn test_document_without_terms_has_empty_ranking() {
        let result = extractor().extract(&docs(&["درخت باغچه", "و در"]), 5);

        assert!(!result.documents[0].is_empty());
        assert!(result.documents[1].is_empty());
        assert_eq!(result.documents[1].scope, Scope::Document(1));
    }
}
