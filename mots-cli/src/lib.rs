//! Mots CLI library
//!
//! Command-line front end over `mots-core`: tokenization, sentence
//! segmentation, lexicon lookups, completion and spelling alternatives.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
