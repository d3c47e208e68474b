//! Markdown output formatter

use super::{escape, OutputFormatter, Record};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs records as a numbered list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    record_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            record_count: 0,
        }
    }
}

impl<W: Write> OutputFormatter for MarkdownFormatter<W> {
    fn format_record(&mut self, record: &Record) -> Result<()> {
        self.record_count += 1;
        write!(
            self.writer,
            "{}. `{}` ({}",
            self.record_count,
            escape(&record.text),
            record.label
        )?;
        if !record.details.is_empty() {
            write!(self.writer, ": {}", record.details.join(", "))?;
        }
        writeln!(self.writer, ")")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total records: {}*", self.record_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
