//! Generate config command implementation

use crate::config::CliConfig;
use anyhow::{Context, Result};
use clap::Args;
use mots_core::application::config::defaults;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Lexicon archive to reference from the configuration
    #[arg(long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        let template = self.generate_template();
        CliConfig::from_toml_str(&template).context("Generated template is invalid")?;

        std::fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template written to {}", self.output.display());
        println!();
        println!("Use it with:");
        println!("   mots sentences -c {} -i 'texts/*.txt'", self.output.display());

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        let lexicon = match &self.lexicon {
            Some(path) => format!("path = {:?}", path.display().to_string()),
            None => "# path = \"lexique.bin\"".to_string(),
        };
        format!(
            r#"# mots configuration

[lexicon]
# Binary lexicon archive (overridden by --lexicon)
{lexicon}

[output]
# text, json or markdown (overridden by --format)
format = "text"
pretty_json = true

[tokenizer]
# Merge multi-token entries (aujourd'hui) and patterns (@handle)
compound = {compound}
# Cap on extra tokens merged into one compound; omit to follow the lexicon
# max_compound_tokens = 8

[traversal]
# Worker threads for completion and correction walks; omit for all cores
# threads = 4
"#,
            compound = defaults::COMPOUND,
        )
    }
}
