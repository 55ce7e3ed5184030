//! Check command: what the send button would do with a message

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::cli::Output;
use crate::guard::{ChatMessage, ContentGuard, MessageText, SendDecision};

#[derive(Args)]
pub struct CheckArgs {
    /// Message the listener is about to send
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Earlier conversation message, oldest first (repeatable)
    #[arg(short, long = "recent", value_name = "MESSAGE")]
    pub recent: Vec<String>,

    /// JSON file with the conversation so far: an array of messages or strings
    #[arg(long, value_name = "FILE")]
    pub history: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// One entry of a history file
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum HistoryEntry {
    Plain(String),
    Message(ChatMessage),
}

impl MessageText for HistoryEntry {
    fn text(&self) -> &str {
        match self {
            HistoryEntry::Plain(text) => text,
            HistoryEntry::Message(message) => &message.text,
        }
    }
}

pub fn execute(args: CheckArgs, config_path: Option<&Path>, output: &Output) -> Result<()> {
    let (_, guard) = super::load_guard(config_path)?;

    let mut recent = match &args.history {
        Some(path) => read_history(path)?,
        None => Vec::new(),
    };
    recent.extend(args.recent.into_iter().map(HistoryEntry::Plain));

    let decision = guard.check_send(&args.text, &recent);

    match args.format {
        OutputFormat::Json => print_json(&decision, &guard, &args.text)?,
        OutputFormat::Text => print_text(&decision, &guard, &args.text, recent.len(), output),
    }

    if matches!(decision, SendDecision::Block(_)) {
        std::process::exit(1);
    }

    Ok(())
}

fn read_history(path: &Path) -> Result<Vec<HistoryEntry>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read history file: {}", path.display()))?;
    let entries: Vec<HistoryEntry> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse history file: {}", path.display()))?;
    tracing::debug!("Read {} history messages from {}", entries.len(), path.display());
    Ok(entries)
}

fn print_text(
    decision: &SendDecision,
    guard: &ContentGuard,
    text: &str,
    history_len: usize,
    output: &Output,
) {
    output.verbose(&format!(
        "Checked against {} of {} recent messages",
        history_len.min(guard.history_window()),
        history_len
    ));

    match decision {
        SendDecision::Skip => output.info("Nothing to send"),
        SendDecision::Send(_) => output.success("Message can be sent"),
        SendDecision::Block(reason) => {
            output.error(reason.user_message());
            output.verbose(&format!("Reason code: {}", reason.code()));
            if let Some(kind) = guard.explain(text) {
                output.verbose(&format!("Matched: {}", kind.as_str()));
            }
        }
    }
}

fn print_json(decision: &SendDecision, guard: &ContentGuard, text: &str) -> Result<()> {
    let report = match decision {
        SendDecision::Skip => serde_json::json!({ "status": "empty" }),
        SendDecision::Send(trimmed) => serde_json::json!({
            "status": "allowed",
            "text": trimmed,
        }),
        SendDecision::Block(reason) => serde_json::json!({
            "status": "rejected",
            "reason": reason,
            "message": reason.user_message(),
            "matched": guard.explain(text),
        }),
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
