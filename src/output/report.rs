//! Keyword report combining extraction output with run metadata

use crate::processing::extractor::ExtractionRequest;
use crate::processing::keywords::{ExtractionOutput, Keyword};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything a formatter needs to render one extraction run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordReport {
    pub metadata: ReportMetadata,

    /// Input documents, aligned with `output.documents`
    pub documents: Vec<String>,

    pub output: ExtractionOutput,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,

    /// Method as requested, which may be unrecognized
    pub requested_method: String,

    pub keyword_count: usize,
    pub document_count: usize,
    pub processing_time_ms: u64,
    pub version: String,
}

/// A document paired with its ranked keywords
pub struct DocumentKeywords<'a> {
    pub index: usize,
    pub text: &'a str,
    pub keywords: &'a [Keyword],
}

impl KeywordReport {
    pub fn new(
        request: &ExtractionRequest,
        requested_method: &str,
        output: ExtractionOutput,
        processing_time_ms: u64,
    ) -> Self {
        Self {
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                requested_method: requested_method.to_string(),
                keyword_count: request.count,
                document_count: request.documents.len(),
                processing_time_ms,
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            documents: request.documents.clone(),
            output,
        }
    }

    /// Method label for display
    pub fn method_label(&self) -> String {
        match self.output.method {
            Some(method) => method.to_string(),
            None => format!("{} (unrecognized)", self.metadata.requested_method),
        }
    }

    pub fn document_keywords(&self) -> Vec<DocumentKeywords<'_>> {
        self.output
            .documents
            .iter()
            .enumerate()
            .map(|(index, ranked)| DocumentKeywords {
                index,
                text: self.documents.get(index).map(String::as_str).unwrap_or(""),
                keywords: &ranked.entries,
            })
            .collect()
    }
}
