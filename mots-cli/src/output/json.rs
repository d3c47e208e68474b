//! JSON output formatter

use super::{OutputFormatter, Record};
use anyhow::Result;
use std::io::Write;

/// JSON formatter - outputs records as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    records: Vec<Record>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            records: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_record(&mut self, record: &Record) -> Result<()> {
        self.records.push(record.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.records)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
