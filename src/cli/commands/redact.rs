//! Redact command: mask forbidden words in received text

use anyhow::{Context, Result};
use clap::Args;
use std::io::Read;
use std::path::Path;

#[derive(Args)]
pub struct RedactArgs {
    /// Text to redact (reads stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,
}

pub fn execute(args: RedactArgs, config_path: Option<&Path>) -> Result<()> {
    let (_, guard) = super::load_guard(config_path)?;

    match args.text {
        Some(text) => println!("{}", guard.redact_inbound(&text)),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read text from stdin")?;
            print!("{}", guard.redact_inbound(&input));
        }
    }

    Ok(())
}
