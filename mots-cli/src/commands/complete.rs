//! Complete command implementation

use super::{describe, parse_language, CommonArgs, OutputArgs};
use crate::error::CliError;
use crate::output::Record;
use anyhow::Result;
use clap::Args;
use mots_core::{Tag, WordVariant};

/// Arguments for the complete command
#[derive(Debug, Args)]
pub struct CompleteArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Keep entries with a reading of this tag (dictionary name: noun, adj, verb...)
    #[arg(short, long, value_name = "TAG")]
    pub tag: Option<String>,

    /// Language of the tagged reading
    #[arg(short, long, value_name = "CODE", default_value = "fr")]
    pub language: String,

    /// Maximum number of completions (0 = unlimited)
    #[arg(short = 'n', long, default_value_t = 20)]
    pub limit: usize,

    /// Prefix to complete
    #[arg(value_name = "PREFIX")]
    pub prefix: String,
}

impl CompleteArgs {
    /// Execute the complete command
    pub fn execute(&self) -> Result<()> {
        let session = self.common.open()?;
        let filter = self.filter()?;
        let suggester = session.processor.suggester();
        let lexicon = session.processor.lexicon();

        let words = suggester.autocomplete(&self.prefix, filter.as_ref())?;
        let limit = if self.limit == 0 { usize::MAX } else { self.limit };
        log::info!("{} completions for {:?}", words.len(), self.prefix);

        let mut formatter = self.output.formatter(&session.config)?;
        for word in words.into_iter().take(limit) {
            formatter.format_record(
                &Record::new(lexicon.spelling(word), 0, "completion")
                    .with_details(describe(word)),
            )?;
        }
        formatter.finish()
    }

    fn filter(&self) -> Result<Option<WordVariant>> {
        let Some(name) = &self.tag else {
            return Ok(None);
        };
        let tag = Tag::from_source_name(name)
            .map_err(|_| CliError::InvalidArgument(format!("unknown tag {name:?}")))?;
        Ok(Some(WordVariant::new(tag, parse_language(&self.language)?)))
    }
}
