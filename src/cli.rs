//! CLI interface for the keyword extractor

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "persian-keywords")]
#[command(about = "Extract keywords from Persian text")]
#[command(long_about = "Extract representative keywords from Persian text, one document per line, using corpus TF-IDF or RAKE-style phrase frequency")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Where to read text from. Standard input is used when neither is given.
#[derive(Args, Debug, Clone)]
pub struct TextSource {
    /// Inline text; each line is one document
    #[arg(short, long, conflicts_with = "file")]
    pub text: Option<String>,

    /// Path to a text file (TXT, MD)
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract keywords
    Extract {
        #[command(flatten)]
        source: TextSource,

        /// Extraction method: tfidf or rake
        #[arg(short, long)]
        method: Option<String>,

        /// Number of keywords per scope
        #[arg(short = 'n', long)]
        count: Option<String>,

        /// Output format: console, json, markdown, html
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Show the tokens used for TF-IDF
    Tokenize {
        #[command(flatten)]
        source: TextSource,
    },

    /// Show the candidate phrases used for RAKE
    Phrases {
        #[command(flatten)]
        source: TextSource,
    },

    /// List the active stopwords
    Stopwords,

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        "html" => Ok(crate::config::OutputFormat::Html),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown, html", format)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("md"), Ok(OutputFormat::Markdown));
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_extract_arguments() {
        let cli = Cli::try_parse_from([
            "persian-keywords", "extract", "--text", "متن", "--method", "rake", "-n", "0",
        ])
        .unwrap();

        match cli.command {
            Commands::Extract { source, method, count, .. } => {
                assert_eq!(source.text.as_deref(), Some("متن"));
                assert_eq!(method.as_deref(), Some("rake"));
                assert_eq!(count.as_deref(), Some("0"));
            }
            _ => panic!("expected extract command"),
        }
    }

    #[test]
    fn test_text_and_file_conflict() {
        let result = Cli::try_parse_from([
            "persian-keywords", "extract", "--text", "متن", "--file", "a.txt",
        ]);
        assert!(result.is_err());
    }
}
