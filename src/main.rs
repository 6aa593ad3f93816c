//! persian-keywords: keyword extraction for Persian text

use clap::Parser;
use log::{error, info};
use persian_keywords::cli::{self, Cli, Commands, ConfigAction, TextSource};
use persian_keywords::config::Config;
use persian_keywords::error::{KeywordError, Result};
use persian_keywords::input::manager::InputManager;
use persian_keywords::input::text_extractor::read_stream;
use persian_keywords::output::formatter::{save_report_to_file, ReportGenerator};
use persian_keywords::output::report::KeywordReport;
use persian_keywords::processing::extractor::{split_documents, ExtractionRequest, KeywordExtractor};
use persian_keywords::processing::segmenter::Segmenter;
use persian_keywords::processing::tokenizer::Tokenizer;
use std::process;
use std::sync::Arc;
use std::time::Instant;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level)
    ).init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    let stopwords = Arc::new(config.stopword_set());

    match command {
        Commands::Extract {
            source,
            method,
            count,
            output,
            save,
        } => {
            let output_format = match output {
                Some(format) => cli::parse_output_format(&format)
                    .map_err(KeywordError::InvalidInput)?,
                None => config.output.format,
            };

            let input = read_source(&source).await?;
            let method = method.unwrap_or_else(|| config.extraction.default_method.clone());
            let count = count.unwrap_or_else(|| config.extraction.default_count.to_string());

            let started = Instant::now();
            let extractor = KeywordExtractor::from_config(&config.extraction, stopwords);
            let request = ExtractionRequest::from_raw(&input, &method, Some(&count));
            let result = extractor.extract(&request);
            let elapsed_ms = started.elapsed().as_millis() as u64;

            info!(
                "Extracted keywords for {} documents in {}ms",
                request.documents.len(),
                elapsed_ms
            );

            let report = KeywordReport::new(&request, &method, result, elapsed_ms);
            let generator = ReportGenerator::with_options(
                config.output.color_output && save.is_none(),
                config.output.pretty_json,
                config.output.score_precision,
            );
            let rendered = generator.generate_report(&report, &output_format)?;

            match save {
                Some(path) => {
                    save_report_to_file(&rendered, &path)?;
                    println!("✅ Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Tokenize { source } => {
            let input = read_source(&source).await?;
            let tokenizer = Tokenizer::new(stopwords)
                .with_min_token_chars(config.extraction.min_token_chars);

            for (i, line) in split_documents(&input).iter().enumerate() {
                println!("{}: {}", i + 1, tokenizer.tokenize(line).join(" | "));
            }
        }

        Commands::Phrases { source } => {
            let input = read_source(&source).await?;
            let segmenter = Segmenter::new(stopwords);

            for (i, line) in split_documents(&input).iter().enumerate() {
                println!("{}: {}", i + 1, segmenter.phrases(line).join(" | "));
            }
        }

        Commands::Stopwords => {
            println!("📋 {} stopwords\n", stopwords.len());
            for word in stopwords.sorted() {
                println!("  • {}", word);
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                let content = toml::to_string_pretty(&config)
                    .map_err(|e| KeywordError::Configuration(format!("Failed to serialize config: {}", e)))?;
                println!("⚙️  Current Configuration\n");
                println!("{}", content);
            }

            Some(ConfigAction::Path) => {
                println!("{}", Config::config_path().display());
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save()?;
                println!("✅ Configuration reset successfully!");
            }
        },
    }

    Ok(())
}

/// Read input text from `--text`, `--file`, or standard input
async fn read_source(source: &TextSource) -> Result<String> {
    if let Some(text) = &source.text {
        return Ok(text.clone());
    }

    if let Some(path) = &source.file {
        return InputManager::new().extract_text(path).await;
    }

    info!("Reading text from standard input");
    read_stream(tokio::io::stdin()).await
}

