//! Command-line interface for chatguard
//!
//! A thin operator surface over the library: check a message the way the send
//! button would, redact received text, and inspect the lexicon and config.

use anyhow::Result;
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;
mod output;

pub use output::Output;

use commands::{check, config, lexicon, redact};

/// chatguard - content guard for listener chat messages
#[derive(Parser)]
#[command(
    name = "chatguard",
    version,
    about = "Content guard for listener chat messages",
    long_about = "Blocks outgoing messages carrying abusive words, links or phone numbers \
                  (including numbers split across recent messages) and masks abusive words \
                  in received messages."
)]
pub struct Cli {
    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Use this configuration file instead of the user and repository config
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Check whether a message may be sent
    Check(check::CheckArgs),
    /// Mask forbidden words in a received message
    Redact(redact::RedactArgs),
    /// Inspect the effective lexicon
    Lexicon(lexicon::LexiconArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        setup_logging(self.verbose, self.quiet);

        let output = Output::new(self.verbose > 0, self.quiet);
        let config_path = self.config.as_deref();

        match self.command {
            Some(Commands::Check(args)) => check::execute(args, config_path, &output),
            Some(Commands::Redact(args)) => redact::execute(args, config_path),
            Some(Commands::Lexicon(args)) => lexicon::execute(args, config_path, &output),
            Some(Commands::Config(args)) => config::execute(args, config_path, &output),
            None => {
                // Show help when no command is provided
                Cli::command().print_help()?;
                Ok(())
            }
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    });

    // Logs go to stderr so JSON on stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
