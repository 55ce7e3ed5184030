//! Configuration commands

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use std::path::Path;

use crate::cli::Output;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the merged configuration
    Show {
        /// Output format
        #[arg(long, value_enum, default_value = "toml")]
        format: ConfigFormat,
    },
    /// Validate configuration and compile the guard
    Validate,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ConfigFormat {
    Toml,
    Json,
}

pub fn execute(args: ConfigArgs, config_path: Option<&Path>, output: &Output) -> Result<()> {
    match args.command {
        ConfigCommands::Show { format } => show(config_path, format),
        ConfigCommands::Validate => validate(config_path, output),
    }
}

fn show(config_path: Option<&Path>, format: ConfigFormat) -> Result<()> {
    let config = crate::config::GuardConfig::load_with_custom_config(config_path)?;

    let rendered = match format {
        ConfigFormat::Toml => {
            toml::to_string_pretty(&config).context("Failed to serialize configuration")?
        }
        ConfigFormat::Json => {
            serde_json::to_string_pretty(&config).context("Failed to serialize configuration")?
        }
    };

    println!("{}", rendered.trim_end());
    Ok(())
}

fn validate(config_path: Option<&Path>, output: &Output) -> Result<()> {
    let (config, guard) = super::load_guard(config_path)?;

    output.success("Configuration is valid");
    output.header("Effective settings");
    output.property("history_window", &config.guard.history_window.to_string());
    output.property("min_phone_digits", &config.guard.min_phone_digits.to_string());
    output.property("lexicon_words", &guard.lexicon().len().to_string());
    output.property("tlds", &config.urls.tlds.join(", "));
    output.property("mask", &guard.mask().to_string());

    Ok(())
}
