//! Error handling for the keyword extractor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeywordError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input is not valid UTF-8: {0}")]
    Encoding(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, KeywordError>;

impl From<std::string::FromUtf8Error> for KeywordError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        KeywordError::Encoding(err.to_string())
    }
}

impl From<askama::Error> for KeywordError {
    fn from(err: askama::Error) -> Self {
        KeywordError::OutputFormatting(err.to_string())
    }
}
