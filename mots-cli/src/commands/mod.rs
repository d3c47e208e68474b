//! CLI command implementations

use crate::config::CliConfig;
use crate::error::CliError;
use crate::output::{create_formatter, OutputFormat, OutputFormatter};
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use mots_core::{Language, Lexicon, Processor, Word};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

pub mod complete;
pub mod correct;
pub mod generate_config;
pub mod lookup;
pub mod sentences;
pub mod tokenize;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split text into classified tokens
    Tokenize(tokenize::TokenizeArgs),

    /// Segment text into sentences
    Sentences(sentences::SentencesArgs),

    /// Show the readings of lexicon entries
    Lookup(lookup::LookupArgs),

    /// List entries starting with a prefix
    Complete(complete::CompleteArgs),

    /// Suggest same-length spellings for a word
    Correct(correct::CorrectArgs),

    /// Write a configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Tokenize(args) => args.execute(),
            Commands::Sentences(args) => args.execute(),
            Commands::Lookup(args) => args.execute(),
            Commands::Complete(args) => args.execute(),
            Commands::Correct(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// Options shared by every command that needs a lexicon
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Binary lexicon archive
    #[arg(long, value_name = "FILE", env = "MOTS_LEXICON")]
    pub lexicon: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Loaded configuration and lexicon
pub struct Session {
    pub config: CliConfig,
    pub processor: Processor,
}

impl CommonArgs {
    /// Initialize logging, read the configuration and load the lexicon
    pub fn open(&self) -> Result<Session> {
        self.init_logging();

        let config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };

        let path = self
            .lexicon
            .as_ref()
            .or(config.lexicon.path.as_ref())
            .ok_or(CliError::LexiconMissing)?;
        let mut lexicon = Lexicon::from_file(path)
            .with_context(|| format!("Failed to load lexicon: {}", path.display()))?;
        lexicon.add_builtins();
        log::info!(
            "lexicon {} holds {} words",
            path.display(),
            lexicon.word_count()
        );

        let processor = Processor::with_config(lexicon, config.core())
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(Session { config, processor })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

/// Text sources: glob patterns, literal words, or stdin
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Literal text, used when no input file is given
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,
}

/// Output destination and format
#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from the config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl OutputArgs {
    /// Formatter writing to the selected destination
    pub fn formatter(&self, config: &CliConfig) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(BufWriter::new(io::stdout())),
        };
        let format = self.format.unwrap_or(config.output.format);
        Ok(create_formatter(format, writer, config.output.pretty_json))
    }
}

/// Parse a `--language` value
pub fn parse_language(name: &str) -> Result<Language> {
    Language::from_name(name)
        .map_err(|_| CliError::InvalidArgument(format!("unknown language {name:?}")).into())
}

/// Readings of `word` as `tag/language` strings
pub fn describe(word: &Word) -> Vec<String> {
    word.variants()
        .iter()
        .map(|v| match v.language.code() {
            "" => v.tag.to_string(),
            code => format!("{}/{code}", v.tag),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};
    use mots_core::{Tag, WordVariant};

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Commands,
    }

    #[test]
    fn test_argument_definitions() {
        TestCli::command().debug_assert();
    }

    #[test]
    fn test_parse_tokenize() {
        let cli = TestCli::try_parse_from([
            "mots",
            "tokenize",
            "--no-compound",
            "-f",
            "json",
            "--lexicon",
            "lexique.bin",
            "La",
            "vie",
        ])
        .unwrap();
        match cli.command {
            Commands::Tokenize(args) => {
                assert!(args.no_compound);
                assert_eq!(args.output.format, Some(OutputFormat::Json));
                assert_eq!(args.common.lexicon, Some(PathBuf::from("lexique.bin")));
                assert_eq!(args.input.text, vec!["La", "vie"]);
                assert!(args.input.input.is_empty());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_correct_defaults() {
        let cli = TestCli::try_parse_from(["mots", "correct", "tast"]).unwrap();
        match cli.command {
            Commands::Correct(args) => {
                assert_eq!(args.language, "fr");
                assert_eq!(args.max_substitutions, 1);
                assert_eq!(args.word, "tast");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_language() {
        assert_eq!(parse_language("fr").unwrap(), Language::French);
        assert_eq!(parse_language("English").unwrap(), Language::English);
        assert!(parse_language("de").is_err());
    }

    #[test]
    fn test_describe_readings() {
        let mut lexicon = Lexicon::with_builtins();
        lexicon
            .insert(
                "été",
                [
                    WordVariant::new(Tag::Noun, Language::French),
                    WordVariant::new(Tag::Verb, Language::French),
                ],
            )
            .unwrap();
        assert_eq!(
            describe(lexicon.get("été").unwrap()),
            vec!["Noun/fr", "Verb/fr"]
        );
        assert_eq!(describe(lexicon.get(".").unwrap()), vec!["Dot"]);
    }

    #[test]
    fn test_missing_lexicon_is_reported() {
        let args = CommonArgs {
            lexicon: None,
            config: None,
            quiet: true,
            verbose: 0,
        };
        let err = args.open().err().unwrap();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::LexiconMissing)
        ));
    }
}
