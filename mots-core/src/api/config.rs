//! Processing configuration
//!
//! ```toml
//! [tokenizer]
//! compound = true
//! # optional; defaults to the lexicon's longest multi-token entry
//! max_compound_tokens = 8
//!
//! [traversal]
//! threads = 4
//! ```

use crate::application::{TokenizerConfig, TraversalConfig};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tokenizer and traversal settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tokenizer: TokenizerConfig,
    pub traversal: TraversalConfig,
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Config = toml::from_str(source)
            .map_err(|e| Error::Configuration(format!("invalid TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| {
            Error::Configuration(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&source)
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Configuration(format!("failed to serialize: {e}")))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.tokenizer.validate()?;
        self.traversal.validate()
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    compound: Option<bool>,
    max_compound_tokens: Option<usize>,
    threads: Option<usize>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable compounding
    pub fn compound(mut self, enabled: bool) -> Self {
        self.compound = Some(enabled);
        self
    }

    /// Cap the number of extra tokens merged into a compound
    pub fn max_compound_tokens(mut self, tokens: usize) -> Self {
        self.max_compound_tokens = Some(tokens);
        self
    }

    /// Set the number of traversal threads (None = all available)
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.threads = count;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if let Some(compound) = self.compound {
            config.tokenizer.compound = compound;
        }

        if let Some(tokens) = self.max_compound_tokens {
            config.tokenizer.max_compound_tokens = Some(tokens);
        }

        if self.threads.is_some() {
            config.traversal.threads = self.threads;
        }

        config.validate()?;
        Ok(config)
    }
}
