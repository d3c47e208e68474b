//! Lexicon-driven tokenizer
//!
//! Tokenization runs in two passes. The primary split cuts the text on
//! punctuation and whitespace, keeping every separator as its own token,
//! and resolves each piece against the lexicon and then the pattern
//! classifiers. The optional compounding pass then merges runs of tokens
//! whose concatenation is a multi-token lexicon entry (`aujourd'hui`) or a
//! pattern (`@mots`). A run is only extended while its spelling is still a
//! path in the lexicon trie.
//!
//! Token spans are byte offsets and always tile the input exactly.

mod classifier;
mod token;

pub use classifier::{Classifiers, PatternClass};
pub use token::{Token, TokenClass};

use crate::application::config::TokenizerConfig;
use crate::application::sentence::{self, TokenSentence};
use crate::domain::lexicon::Lexicon;
use crate::domain::text;
use crate::error::Result;
use log::trace;
use std::ops::Range;

/// Tokenizer bound to one lexicon
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    lexicon: &'a Lexicon,
    classifiers: Classifiers,
    config: TokenizerConfig,
}

impl<'a> Tokenizer<'a> {
    /// Tokenizer with the default configuration
    pub fn new(lexicon: &'a Lexicon) -> Result<Self> {
        Self::with_config(lexicon, &TokenizerConfig::default())
    }

    pub fn with_config(lexicon: &'a Lexicon, config: &TokenizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(lexicon, Classifiers::new()?, config.clone()))
    }

    /// Reuse already compiled classifiers; `config` must be validated
    pub(crate) fn from_parts(
        lexicon: &'a Lexicon,
        classifiers: Classifiers,
        config: TokenizerConfig,
    ) -> Self {
        Self {
            lexicon,
            classifiers,
            config,
        }
    }

    pub fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Split `text` into tokens, optionally compounding
    pub fn tokenize(&self, text: &str, compound: bool) -> Vec<Token<'a>> {
        let tokens: Vec<Token<'a>> = text::split_runs(text)
            .map(|span| self.build_token(text, span))
            .collect();
        if compound {
            self.compound(text, tokens)
        } else {
            tokens
        }
    }

    /// Tokenize with compounding, then group tokens into sentences
    pub fn segment_sentences(&self, text: &str) -> Vec<TokenSentence<'a>> {
        let tokens = self.tokenize(text, true);
        sentence::segment(&tokens)
            .into_iter()
            .map(|span| TokenSentence::new(tokens[span.range].to_vec(), span.kind))
            .collect()
    }

    /// Resolve one span of `text`
    ///
    /// The lexicon is tried first, lowercased when the span starts with an
    /// uppercase letter, then the pattern classifiers.
    pub fn build_token(&self, text: &str, span: Range<usize>) -> Token<'a> {
        self.resolve(text, span).0
    }

    /// Returns the token and whether the lexicon path for the span exists
    fn resolve(&self, text: &str, span: Range<usize>) -> (Token<'a>, bool) {
        let piece = &text[span.clone()];
        let is_upper = text::starts_uppercase(piece);

        let exact = self.lexicon.lookup(piece);
        let mut word = exact.word;
        let mut path_exists = exact.path_exists;
        if word.is_none() && is_upper {
            let lower = self.lexicon.lookup(&piece.to_lowercase());
            word = lower.word;
            path_exists |= lower.path_exists;
        }

        let class = match word {
            Some(word) => TokenClass::Word(word),
            None => self
                .classifiers
                .classify(piece)
                .map_or(TokenClass::Unresolved, TokenClass::from),
        };
        (Token::new(span, class, is_upper), path_exists)
    }

    fn compound(&self, text: &str, tokens: Vec<Token<'a>>) -> Vec<Token<'a>> {
        let window = self
            .config
            .compound_window(self.lexicon.max_entry_tokens());
        if window == 0 {
            return tokens;
        }

        let mut merged = Vec::with_capacity(tokens.len());
        let mut i = 0;
        while i < tokens.len() {
            let start = tokens[i].start();
            let candidate = text[start..]
                .chars()
                .next()
                .is_some_and(|c| !c.is_whitespace() && !c.is_numeric());

            let mut best = None;
            if candidate {
                let last = (i + window).min(tokens.len() - 1);
                for j in i + 1..=last {
                    let (token, path_exists) = self.resolve(text, start..tokens[j].end());
                    if token.is_resolved() {
                        best = Some((token, j));
                    }
                    // No longer span can be a lexicon entry once the path is gone
                    if !path_exists {
                        break;
                    }
                }
            }

            match best {
                Some((token, j)) => {
                    trace!(
                        "compound {:?} over tokens {i}..={j} as {}",
                        token.text(text),
                        token.class().label()
                    );
                    merged.push(token);
                    i = j + 1;
                }
                None => {
                    merged.push(tokens[i]);
                    i += 1;
                }
            }
        }
        merged
    }
}
