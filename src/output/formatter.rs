//! Output formatters: console, JSON, Markdown and HTML

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::KeywordReport;
use crate::processing::keywords::Keyword;
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting keyword reports
pub trait OutputFormatter {
    fn format_report(&self, report: &KeywordReport) -> Result<String>;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    precision: usize,
}

/// JSON formatter for structured output
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter with keyword tables
pub struct MarkdownFormatter {
    include_metadata: bool,
    precision: usize,
}

/// Right-to-left HTML page
pub struct HtmlFormatter {
    include_styles: bool,
    precision: usize,
}

/// Report generator that dispatches to the formatter for each format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="fa" dir="rtl">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>استخراج کلمات کلیدی</title>
    {% if include_styles %}
    <style>
        body { font-family: Tahoma, sans-serif; max-width: 860px; margin: 0 auto; padding: 20px; background: #f8f9fa; color: #333; }
        .container { background: white; padding: 24px; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
        h2 { color: #007acc; border-bottom: 2px solid #e9ecef; padding-bottom: 8px; }
        .meta { color: #6c757d; font-size: 0.9em; }
        .text { background: #f1f3f5; padding: 8px 12px; border-radius: 4px; }
        table { border-collapse: collapse; width: 100%; margin: 10px 0 20px; }
        th, td { border: 1px solid #dee2e6; padding: 6px 10px; text-align: right; }
        th { background: #e9ecef; }
    </style>
    {% endif %}
</head>
<body>
<div class="container">
    <h1>کلمات کلیدی</h1>
    <p class="meta">{{ method }} | {{ document_count }} texts | top {{ keyword_count }} | {{ generated_at }}</p>
    {% if has_corpus %}
    <h2>کلمات کلیدی کل متون</h2>
    <table>
        <tr><th>#</th><th>Keyword</th><th>Score</th></tr>
        {% for row in corpus %}
        <tr><td>{{ loop.index }}</td><td>{{ row.term }}</td><td>{{ row.score }}</td></tr>
        {% endfor %}
    </table>
    {% endif %}
    {% for doc in documents %}
    <h2>متن {{ doc.number }}</h2>
    <p class="text">{{ doc.text }}</p>
    {% if doc.rows.is_empty() %}
    <p class="meta">No keywords</p>
    {% else %}
    <table>
        <tr><th>#</th><th>Keyword</th><th>Score</th></tr>
        {% for row in doc.rows %}
        <tr><td>{{ loop.index }}</td><td>{{ row.term }}</td><td>{{ row.score }}</td></tr>
        {% endfor %}
    </table>
    {% endif %}
    {% endfor %}
    <p class="meta">persian-keywords v{{ version }}</p>
</div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    method: String,
    document_count: usize,
    keyword_count: usize,
    generated_at: String,
    has_corpus: bool,
    corpus: Vec<HtmlRow>,
    documents: Vec<HtmlDocument>,
    version: String,
}

struct HtmlRow {
    term: String,
    score: String,
}

struct HtmlDocument {
    number: usize,
    text: String,
    rows: Vec<HtmlRow>,
}

fn rows(keywords: &[Keyword], precision: usize) -> Vec<HtmlRow> {
    keywords
        .iter()
        .map(|k| HtmlRow {
            term: k.term.clone(),
            score: k.score.display(precision),
        })
        .collect()
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, precision: usize) -> Self {
        Self { use_colors, precision }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{} {}\n", "▓".color(Color::Blue).bold(), title.color(Color::Blue).bold())
        } else {
            format!("\n▓ {}\n", title)
        }
    }

    fn format_keywords(&self, keywords: &[Keyword]) -> String {
        if keywords.is_empty() {
            return format!("  {}\n", self.colorize("(no keywords)", Color::BrightBlack));
        }

        keywords
            .iter()
            .enumerate()
            .map(|(i, k)| {
                format!(
                    "  {}. {} {}\n",
                    i + 1,
                    self.colorize(&k.term, Color::Cyan),
                    self.colorize(&format!("({})", k.score.display(self.precision)), Color::Yellow)
                )
            })
            .collect()
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &KeywordReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("KEYWORD EXTRACTION"));
        output.push_str(&format!(
            "Method: {} | Texts: {} | Top: {} | Processing time: {}ms\n",
            report.method_label(),
            report.metadata.document_count,
            report.metadata.keyword_count,
            report.metadata.processing_time_ms
        ));

        if report.output.method.is_none() {
            output.push_str(&self.colorize("⚠️  Unknown method, no keywords extracted\n", Color::Yellow));
            return Ok(output);
        }

        if !report.output.corpus.is_empty() {
            output.push_str(&self.format_header("Corpus keywords"));
            output.push_str(&self.format_keywords(report.output.corpus_keywords()));
        }

        for doc in report.document_keywords() {
            output.push_str(&self.format_header(&format!("Text {}", doc.index + 1)));
            output.push_str(&format!("  {}\n", truncate_text(doc.text, 80)));
            output.push_str(&self.format_keywords(doc.keywords));
        }

        Ok(output)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &KeywordReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool, precision: usize) -> Self {
        Self { include_metadata, precision }
    }

    fn keyword_table(&self, keywords: &[Keyword]) -> String {
        if keywords.is_empty() {
            return "_No keywords_\n\n".to_string();
        }

        let mut table = String::from("| # | Keyword | Score |\n|---|---|---|\n");
        for (i, k) in keywords.iter().enumerate() {
            table.push_str(&format!(
                "| {} | {} | {} |\n",
                i + 1,
                k.term.replace('|', "\\|"),
                k.score.display(self.precision)
            ));
        }
        table.push('\n');
        table
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &KeywordReport) -> Result<String> {
        let mut output = String::from("# Keyword Extraction\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "- **Method:** {}\n- **Texts:** {}\n- **Keywords per scope:** {}\n- **Generated:** {}\n\n",
                report.method_label(),
                report.metadata.document_count,
                report.metadata.keyword_count,
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }

        if !report.output.corpus.is_empty() {
            output.push_str("## Corpus keywords\n\n");
            output.push_str(&self.keyword_table(report.output.corpus_keywords()));
        }

        for doc in report.document_keywords() {
            output.push_str(&format!("## Text {}\n\n> {}\n\n", doc.index + 1, doc.text));
            output.push_str(&self.keyword_table(doc.keywords));
        }

        Ok(output)
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool, precision: usize) -> Self {
        Self { include_styles, precision }
    }

    fn create_template_data(&self, report: &KeywordReport) -> HtmlTemplate {
        HtmlTemplate {
            include_styles: self.include_styles,
            method: report.method_label(),
            document_count: report.metadata.document_count,
            keyword_count: report.metadata.keyword_count,
            generated_at: report
                .metadata
                .generated_at
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string(),
            has_corpus: !report.output.corpus.is_empty(),
            corpus: rows(report.output.corpus_keywords(), self.precision),
            documents: report
                .document_keywords()
                .into_iter()
                .map(|doc| HtmlDocument {
                    number: doc.index + 1,
                    text: doc.text.to_string(),
                    rows: rows(doc.keywords, self.precision),
                })
                .collect(),
            version: report.metadata.version.clone(),
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &KeywordReport) -> Result<String> {
        Ok(self.create_template_data(report).render()?)
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, true, 4)
    }

    pub fn with_options(use_colors: bool, pretty_json: bool, precision: usize) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, precision),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(true, precision),
            html_formatter: HtmlFormatter::new(true, precision),
        }
    }

    pub fn generate_report(&self, report: &KeywordReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Html => self.html_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

/// Truncate to at most `max_chars` characters, cutting at a word boundary
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let truncated: String = text.chars().take(max_chars).collect();
    match truncated.rfind(' ') {
        Some(last_space) => format!("{}...", &truncated[..last_space]),
        None => format!("{}...", truncated),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::extractor::{ExtractionRequest, KeywordExtractor};

    fn report(input: &str, method: &str) -> KeywordReport {
        let request = ExtractionRequest::from_raw(input, method, Some("3"));
        let output = KeywordExtractor::default().extract(&request);
        KeywordReport::new(&request, method, output, 2)
    }

    #[test]
    fn test_console_output() {
        let formatter = ConsoleFormatter::new(false, 3);
        let text = formatter
            .format_report(&report("باغ سبز. باغ سبز\nکتاب خوب", "rake"))
            .unwrap();

        assert!(text.contains("Method: rake"));
        assert!(text.contains("Text 1"));
        assert!(text.contains("1. باغ سبز (2)"));
        assert!(!text.contains("Corpus keywords"));
    }

    #[test]
    fn test_console_unknown_method() {
        let formatter = ConsoleFormatter::new(false, 3);
        let text = formatter.format_report(&report("باغ سبز", "foo")).unwrap();
        assert!(text.contains("Unknown method"));
    }

    #[test]
    fn test_json_output() {
        let json = JsonFormatter::new(false)
            .format_report(&report("درخت باغچه\nکتاب مدرسه", "tfidf"))
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["output"]["method"], "tfidf");
        assert_eq!(value["output"]["documents"].as_array().unwrap().len(), 2);
        assert!(value["output"]["corpus"]["entries"][0]["score"].is_f64());
    }

    #[test]
    fn test_markdown_output() {
        let markdown = MarkdownFormatter::new(true, 2)
            .format_report(&report("درخت باغچه", "tfidf"))
            .unwrap();

        assert!(markdown.contains("## Corpus keywords"));
        assert!(markdown.contains("| 1 |"));
        assert!(markdown.contains("**Method:** tfidf"));
    }

    #[test]
    fn test_html_output() {
        let html = HtmlFormatter::new(true, 2)
            .format_report(&report("درخت باغچه\nکتاب <b>مدرسه</b>", "tfidf"))
            .unwrap();

        assert!(html.contains("dir=\"rtl\""));
        assert!(html.contains("درخت"));
        assert!(html.contains("متن 2"));
        // Input text is escaped
        assert!(!html.contains("<b>مدرسه</b>"));
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("کوتاه", 10), "کوتاه");
        assert_eq!(truncate_text("کلمه اول دوم", 8), "کلمه...");
    }
}
