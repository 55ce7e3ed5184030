//! Command implementations for the chatguard CLI
//!
//! Each command lives in its own module.

use anyhow::Result;
use std::path::Path;

use crate::config::GuardConfig;
use crate::guard::ContentGuard;

pub mod check;
pub mod config;
pub mod lexicon;
pub mod redact;

/// Load configuration (pinned file or standard layering) and build the guard
pub(crate) fn load_guard(config_path: Option<&Path>) -> Result<(GuardConfig, ContentGuard)> {
    let config = GuardConfig::load_with_custom_config(config_path)?;
    let guard = ContentGuard::from_config(&config)?;
    Ok((config, guard))
}
