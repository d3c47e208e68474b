//! `mots` command-line entry point

use clap::Parser;
use mots_cli::commands::Commands;

/// Tokenize French and English text against a morphological lexicon
#[derive(Debug, Parser)]
#[command(name = "mots", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    Cli::parse().command.execute()
}
