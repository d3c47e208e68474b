//! Configuration module
//!
//! The CLI reads one TOML file holding the core sections (`[tokenizer]`,
//! `[traversal]`) next to its own `[lexicon]` and `[output]` sections.

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use mots_core::application::{TokenizerConfig, TraversalConfig};
use mots_core::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CliConfig {
    /// Lexicon archive location
    #[serde(default)]
    pub lexicon: LexiconConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub tokenizer: TokenizerConfig,

    #[serde(default)]
    pub traversal: TraversalConfig,
}

/// Lexicon-related configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct LexiconConfig {
    /// Binary lexicon archive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Parse a TOML document and validate the core sections
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: CliConfig =
            toml::from_str(source).map_err(|e| CliError::ConfigError(e.to_string()))?;
        config
            .core()
            .validate()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(config)
    }

    /// Read a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_toml_str(&source)
            .with_context(|| format!("Invalid config: {}", path.display()))
    }

    /// Library configuration carried by this file
    pub fn core(&self) -> Config {
        Config {
            tokenizer: self.tokenizer.clone(),
            traversal: self.traversal.clone(),
        }
    }
}
