//! Lookup command implementation

use super::{describe, CommonArgs, OutputArgs};
use crate::output::Record;
use anyhow::Result;
use clap::Args;

/// Arguments for the lookup command
#[derive(Debug, Args)]
pub struct LookupArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Fall back to the longest entry that prefixes the word
    #[arg(long)]
    pub prefix: bool,

    /// Spellings to look up
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,
}

impl LookupArgs {
    /// Execute the lookup command
    pub fn execute(&self) -> Result<()> {
        let session = self.common.open()?;
        let lexicon = session.processor.lexicon();
        let mut formatter = self.output.formatter(&session.config)?;

        for spelling in &self.words {
            let record = match lexicon.get(spelling) {
                Some(word) => {
                    Record::new(spelling.as_str(), 0, "found").with_details(describe(word))
                }
                None => match lexicon.longest_prefix(spelling).filter(|_| self.prefix) {
                    Some(word) => Record::new(lexicon.spelling(word), 0, "prefix")
                        .with_details(describe(word)),
                    None => Record::new(spelling.as_str(), 0, "missing"),
                },
            };
            formatter.format_record(&record)?;
        }
        formatter.finish()
    }
}
