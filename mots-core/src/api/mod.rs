//! Owning, configuration-driven entry point
//!
//! [`Processor`] bundles a loaded lexicon with a validated [`Config`] and
//! hands out tokenizers and suggesters bound to it. The CLI drives all
//! analysis through a [`Processor`] and reaches into the lower layers only
//! for helpers such as `count_substitutions` and configuration defaults.

mod config;
mod input;
mod processor;

pub use config::{Config, ConfigBuilder};
pub use input::Input;
pub use processor::{Analysis, Processor};
