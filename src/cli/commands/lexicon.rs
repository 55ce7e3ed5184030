//! Lexicon commands

use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::Path;

use crate::cli::Output;

#[derive(Args)]
pub struct LexiconArgs {
    #[command(subcommand)]
    pub command: LexiconCommands,
}

#[derive(Subcommand)]
pub enum LexiconCommands {
    /// Print every effective lexicon word, one per line
    List,
    /// Print how many words the effective lexicon holds
    Count,
}

pub fn execute(args: LexiconArgs, config_path: Option<&Path>, output: &Output) -> Result<()> {
    let (config, guard) = super::load_guard(config_path)?;

    match args.command {
        LexiconCommands::List => {
            for word in guard.lexicon().words() {
                println!("{word}");
            }
        }
        LexiconCommands::Count => {
            println!("{}", guard.lexicon().len());
            match &config.lexicon.path {
                Some(path) => output.verbose(&format!("Base lexicon: {}", path.display())),
                None => output.verbose("Base lexicon: built-in"),
            }
        }
    }

    Ok(())
}
