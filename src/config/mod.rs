//! Configuration management for chatguard
//!
//! Typed settings for the content guard. Values are layered with figment from
//! the embedded `default-config.toml`, user and repository config files, and
//! `CHATGUARD_*` environment variables (see [`GuardConfig::load`]).

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod loader;
pub mod smart_load;

pub use loader::ENV_PREFIX;

/// Main configuration structure for chatguard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GuardConfig {
    /// Outgoing validation settings
    pub guard: GuardSettings,

    /// Forbidden-word lexicon sources
    pub lexicon: LexiconConfig,

    /// URL detection settings
    pub urls: UrlConfig,

    /// Inbound redaction settings
    pub redaction: RedactionConfig,
}

/// Outgoing validation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardSettings {
    /// How many of the most recent conversation messages take part in
    /// fragmented phone-number detection
    pub history_window: usize,

    /// Digit run length treated as a phone number
    pub min_phone_digits: usize,
}

/// Lexicon configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LexiconConfig {
    /// Lexicon file replacing the built-in word list (toml, json or yaml)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Words added on top of the base lexicon
    pub extra_words: Vec<String>,

    /// Words removed from the base lexicon
    pub exclude_words: Vec<String>,
}

/// URL detection configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlConfig {
    /// Top-level domains that turn a bare `name.tld` token into a link
    pub tlds: Vec<String>,
}

/// Redaction configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedactionConfig {
    /// Character repeated over every masked word
    pub mask: char,
}

impl Default for GuardSettings {
    fn default() -> Self {
        Self {
            history_window: 5,
            min_phone_digits: 7,
        }
    }
}

impl Default for UrlConfig {
    fn default() -> Self {
        Self {
            tlds: ["com", "org", "net", "in", "co", "io"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl Default for RedactionConfig {
    fn default() -> Self {
        Self { mask: '*' }
    }
}

impl GuardConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.guard.history_window == 0 {
            anyhow::bail!("guard.history_window must be at least 1");
        }

        if self.guard.min_phone_digits < 2 {
            anyhow::bail!(
                "guard.min_phone_digits must be at least 2 (got {})",
                self.guard.min_phone_digits
            );
        }

        for tld in &self.urls.tlds {
            if tld.is_empty() || !tld.chars().all(|c| c.is_ascii_alphanumeric()) {
                anyhow::bail!("urls.tlds contains an invalid top-level domain: {tld:?}");
            }
        }

        // A word-character mask could itself be matched as part of a word,
        // which would break redaction idempotence.
        let mask = self.redaction.mask;
        if mask.is_alphanumeric() || mask == '_' {
            anyhow::bail!("redaction.mask must not be a letter, digit or underscore (got {mask:?})");
        }

        Ok(())
    }
}
