//! Text processing and keyword extraction module

pub mod stopwords;
pub mod tokenizer;
pub mod segmenter;
pub mod keywords;
pub mod tfidf;
pub mod rake;
pub mod extractor;
