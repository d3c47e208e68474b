//! Sentences command implementation

use super::{CommonArgs, InputArgs, OutputArgs};
use crate::input::collect_sources;
use crate::output::Record;
use crate::progress::ProgressReporter;
use anyhow::Result;
use clap::Args;
use mots_core::{Input, SentenceKind};
use rayon::prelude::*;

/// Arguments for the sentences command
#[derive(Debug, Args)]
pub struct SentencesArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Also print separator runs between sentences
    #[arg(long)]
    pub separators: bool,
}

impl SentencesArgs {
    /// Execute the sentences command
    pub fn execute(&self) -> Result<()> {
        let session = self.common.open()?;
        let sources = collect_sources(&self.input.input, &self.input.text)?;

        let mut progress = ProgressReporter::new(self.common.quiet);
        progress.init_files(sources.len() as u64);
        let tagged = sources.len() > 1;
        let batches: Vec<Vec<Record>> = sources
            .into_par_iter()
            .map(|source| -> mots_core::Result<Vec<Record>> {
                let analysis = session.processor.process(Input::from_text(source.text))?;
                log::debug!(
                    "{}: {} sentences, {} tokens in {:?}",
                    source.name,
                    analysis.sentences.len(),
                    analysis.token_count(),
                    analysis.elapsed
                );
                let label = tagged.then_some(source.name.as_str());
                let records = analysis
                    .sentences
                    .iter()
                    .filter(|s| self.separators || s.kind() != SentenceKind::Separator)
                    .map(|s| {
                        Record::new(s.text(&analysis.text), s.span().start, s.kind().label())
                            .with_source(label)
                    })
                    .collect();
                progress.file_completed(&source.name);
                Ok(records)
            })
            .collect::<mots_core::Result<_>>()?;
        progress.finish();

        let mut formatter = self.output.formatter(&session.config)?;
        for record in batches.iter().flatten() {
            formatter.format_record(record)?;
        }
        formatter.finish()
    }
}
