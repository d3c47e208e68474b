//! Correct command implementation

use super::{describe, parse_language, CommonArgs, OutputArgs};
use crate::output::Record;
use anyhow::Result;
use clap::Args;
use mots_core::application::count_substitutions;

/// Arguments for the correct command
#[derive(Debug, Args)]
pub struct CorrectArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Language of the candidates
    #[arg(short, long, value_name = "CODE", default_value = "fr")]
    pub language: String,

    /// Maximum differing characters
    #[arg(short = 'd', long, default_value_t = 1)]
    pub max_substitutions: usize,

    /// Word to correct
    #[arg(value_name = "WORD")]
    pub word: String,
}

impl CorrectArgs {
    /// Execute the correct command
    pub fn execute(&self) -> Result<()> {
        let session = self.common.open()?;
        let language = parse_language(&self.language)?;
        let lexicon = session.processor.lexicon();
        let words = session.processor.suggester().find_alternatives(
            &self.word,
            language,
            self.max_substitutions,
        )?;

        let mut formatter = self.output.formatter(&session.config)?;
        for word in words {
            let spelling = lexicon.spelling(word);
            let distance = count_substitutions(&self.word, &spelling);
            formatter.format_record(
                &Record::new(spelling, 0, format!("distance {distance}"))
                    .with_details(describe(word)),
            )?;
        }
        formatter.finish()
    }
}
