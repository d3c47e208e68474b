//! Tuning knobs for the tokenizer and for lexicon traversals

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default configuration constants
pub mod defaults {
    /// Merge multi-token entries unless told otherwise
    pub const COMPOUND: bool = true;
}

/// Tokenizer settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Merge primary-split tokens into multi-token entries and patterns
    pub compound: bool,

    /// Optional cap on extra tokens merged into one compound
    ///
    /// Without a cap the window is the lexicon's longest multi-token entry,
    /// otherwise the smaller of the two.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_compound_tokens: Option<usize>,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            compound: defaults::COMPOUND,
            max_compound_tokens: None,
        }
    }
}

impl TokenizerConfig {
    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.compound && self.max_compound_tokens == Some(0) {
            return Err(Error::Configuration(
                "max_compound_tokens must be greater than 0 when compounding".to_string(),
            ));
        }
        Ok(())
    }

    /// Extra tokens a compound may absorb, given the lexicon's longest entry
    pub fn compound_window(&self, max_entry_tokens: usize) -> usize {
        match self.max_compound_tokens {
            Some(cap) => max_entry_tokens.min(cap),
            None => max_entry_tokens,
        }
    }
}

/// Lexicon traversal settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraversalConfig {
    /// Worker threads for suggestion walks (None = all available, 1 = sequential)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threads: Option<usize>,
}

impl TraversalConfig {
    /// Sequential traversal on the calling thread
    pub fn sequential() -> Self {
        Self { threads: Some(1) }
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.threads == Some(0) {
            return Err(Error::Configuration(
                "threads must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolved worker count
    pub fn thread_count(&self) -> usize {
        #[cfg(feature = "parallel")]
        {
            self.threads.unwrap_or_else(num_cpus::get)
        }
        #[cfg(not(feature = "parallel"))]
        {
            1
        }
    }
}
