//! Output formatting module
//!
//! Every command reduces its result to a flat list of [`Record`]s, which
//! a formatter renders as text lines, a JSON array or a Markdown list.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated, one record per line
    #[default]
    Text,
    /// JSON array of records
    Json,
    /// Markdown numbered list
    Markdown,
}

/// One unit of command output: a token, a sentence or a lexicon entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Input the record came from, when there are several
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub text: String,
    /// Byte offset in the source text
    pub offset: usize,
    /// Byte length
    pub length: usize,
    /// Token class, sentence kind or lookup status
    pub label: String,
    /// Readings, as `tag/language`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl Record {
    pub fn new(text: impl Into<String>, offset: usize, label: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            source: None,
            length: text.len(),
            text,
            offset,
            label: label.into(),
            details: Vec::new(),
        }
    }

    pub fn with_source(mut self, source: Option<&str>) -> Self {
        self.source = source.map(str::to_string);
        self
    }

    pub fn with_details(mut self, details: Vec<String>) -> Self {
        self.details = details;
        self
    }
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output a single record
    fn format_record(&mut self, record: &Record) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Escape control characters so each record stays on one line
pub(crate) fn escape(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_control() {
                c.escape_default().to_string()
            } else {
                c.to_string()
            }
        })
        .collect()
}

/// Build the formatter for `format` over `writer`
pub fn create_formatter<'w>(
    format: OutputFormat,
    writer: Box<dyn Write + 'w>,
    pretty_json: bool,
) -> Box<dyn OutputFormatter + 'w> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}
