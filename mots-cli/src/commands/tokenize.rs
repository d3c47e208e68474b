//! Tokenize command implementation

use super::{describe, CommonArgs, InputArgs, OutputArgs};
use crate::input::{collect_sources, Source};
use crate::output::Record;
use crate::progress::ProgressReporter;
use anyhow::Result;
use clap::Args;
use mots_core::Processor;
use rayon::prelude::*;

/// Arguments for the tokenize command
#[derive(Debug, Args)]
pub struct TokenizeArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Keep the primary split; do not merge multi-token entries
    #[arg(long)]
    pub no_compound: bool,

    /// Drop whitespace tokens from the output
    #[arg(long)]
    pub skip_whitespace: bool,
}

impl TokenizeArgs {
    /// Execute the tokenize command
    pub fn execute(&self) -> Result<()> {
        let session = self.common.open()?;
        let sources = collect_sources(&self.input.input, &self.input.text)?;
        let compound = session.config.tokenizer.compound && !self.no_compound;
        log::info!("tokenizing {} inputs (compound: {compound})", sources.len());

        let mut progress = ProgressReporter::new(self.common.quiet);
        progress.init_files(sources.len() as u64);
        let tagged = sources.len() > 1;
        let batches: Vec<Vec<Record>> = sources
            .par_iter()
            .map(|source| {
                let records = self.records(&session.processor, source, compound, tagged);
                progress.file_completed(&source.name);
                records
            })
            .collect();
        progress.finish();

        let mut formatter = self.output.formatter(&session.config)?;
        for record in batches.iter().flatten() {
            formatter.format_record(record)?;
        }
        formatter.finish()
    }

    fn records(
        &self,
        processor: &Processor,
        source: &Source,
        compound: bool,
        tagged: bool,
    ) -> Vec<Record> {
        let label = tagged.then_some(source.name.as_str());
        processor
            .tokenizer()
            .tokenize(&source.text, compound)
            .iter()
            .filter(|token| !(self.skip_whitespace && (token.is_whitespace() || token.is_tab())))
            .map(|token| {
                Record::new(token.text(&source.text), token.start(), token.class().label())
                    .with_source(label)
                    .with_details(token.word().map(describe).unwrap_or_default())
            })
            .collect()
    }
}
