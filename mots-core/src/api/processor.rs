//! Owning facade over a lexicon and its configuration

use std::time::{Duration, Instant};

use crate::api::{Config, Input};
use crate::application::suggest::Workers;
use crate::application::{Classifiers, Suggester, Token, TokenSentence, Tokenizer};
use crate::domain::lexicon::Lexicon;
use crate::error::Result;
use log::debug;

/// Lexicon plus configuration, ready to analyse text
#[derive(Debug, Clone)]
pub struct Processor {
    lexicon: Lexicon,
    classifiers: Classifiers,
    workers: Workers,
    config: Config,
}

impl Processor {
    /// Create a processor with default configuration
    pub fn new(lexicon: Lexicon) -> Result<Self> {
        Self::with_config(lexicon, Config::default())
    }

    /// Create a processor with custom configuration
    pub fn with_config(lexicon: Lexicon, config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            lexicon,
            classifiers: Classifiers::new()?,
            workers: Workers::new(&config.traversal)?,
            config,
        })
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn tokenizer(&self) -> Tokenizer<'_> {
        Tokenizer::from_parts(
            &self.lexicon,
            self.classifiers.clone(),
            self.config.tokenizer.clone(),
        )
    }

    /// Suggester sharing this processor's worker pool
    pub fn suggester(&self) -> Suggester<'_> {
        Suggester::from_parts(&self.lexicon, self.workers.clone())
    }

    /// Tokenize, compounding as configured
    pub fn tokenize(&self, text: &str) -> Vec<Token<'_>> {
        self.tokenizer()
            .tokenize(text, self.config.tokenizer.compound)
    }

    /// Read `input` and segment it into sentences
    pub fn process(&self, input: Input) -> Result<Analysis<'_>> {
        let start = Instant::now();
        let text = input.into_text()?;
        let sentences = self.tokenizer().segment_sentences(&text);
        let elapsed = start.elapsed();
        debug!(
            "segmented {} bytes into {} spans in {:?}",
            text.len(),
            sentences.len(),
            elapsed
        );
        Ok(Analysis {
            text,
            sentences,
            elapsed,
        })
    }
}

/// Result of [`Processor::process`]
#[derive(Debug, Clone)]
pub struct Analysis<'a> {
    /// The analysed text; token spans index into it
    pub text: String,
    pub sentences: Vec<TokenSentence<'a>>,
    pub elapsed: Duration,
}

impl<'a> Analysis<'a> {
    /// All tokens in order
    pub fn tokens(&self) -> impl Iterator<Item = &Token<'a>> + '_ {
        self.sentences.iter().flat_map(|s| s.tokens().iter())
    }

    pub fn token_count(&self) -> usize {
        self.sentences.iter().map(|s| s.tokens().len()).sum()
    }

    /// Tokens neither the lexicon nor a pattern resolved
    pub fn unresolved(&self) -> impl Iterator<Item = &str> + '_ {
        self.tokens()
            .filter(|t| !t.is_resolved())
            .map(|t| t.text(&self.text))
    }
}
