//! Plain text output formatter

use super::{escape, OutputFormatter, Record};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - one tab-separated record per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_record(&mut self, record: &Record) -> Result<()> {
        if let Some(source) = &record.source {
            write!(self.writer, "{source}\t")?;
        }
        write!(self.writer, "{}\t{}", escape(&record.text), record.label)?;
        if !record.details.is_empty() {
            write!(self.writer, "\t{}", record.details.join(","))?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
