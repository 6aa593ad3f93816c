//! Persian keyword extraction library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{KeywordError, Result};
pub use processing::extractor::{ExtractionRequest, KeywordExtractor};
pub use processing::keywords::{ExtractionOutput, Keyword, Method, RankedResult, Score, Scope};
pub use processing::stopwords::StopwordSet;
