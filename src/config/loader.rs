use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use std::path::{Path, PathBuf};

use super::{GuardConfig, smart_load};

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

/// Prefix for environment overrides, e.g. `CHATGUARD_GUARD__HISTORY_WINDOW=3`
pub const ENV_PREFIX: &str = "CHATGUARD_";

const CONFIG_EXTENSIONS: [&str; 4] = ["toml", "json", "yaml", "yml"];

impl GuardConfig {
    /// Load configuration using the standard layering
    pub fn load() -> Result<Self> {
        Self::load_with_custom_config(None)
    }

    /// The embedded defaults alone, without user, repository or env layers
    pub fn embedded() -> Result<Self> {
        let config: GuardConfig = Figment::from(Toml::string(DEFAULT_CONFIG))
            .extract()
            .context("Failed to parse embedded default configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration, optionally pinning a single config file
    ///
    /// With `custom_config`, only the embedded defaults, that file, and the
    /// environment are merged. Otherwise user config (`~/.config/chatguard/`)
    /// and repository config (`./chatguard.*`) are picked up when present.
    pub fn load_with_custom_config(custom_config: Option<&Path>) -> Result<Self> {
        if let Some(path) = custom_config {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
        }

        let config: GuardConfig = Self::figment(custom_config)
            .extract()
            .context("Failed to parse chatguard configuration")?;

        config
            .validate()
            .context("Invalid chatguard configuration")?;

        tracing::debug!(
            history_window = config.guard.history_window,
            min_phone_digits = config.guard.min_phone_digits,
            tlds = config.urls.tlds.len(),
            "Loaded configuration"
        );

        Ok(config)
    }

    /// Build the layered figment without extracting it
    pub fn figment(custom_config: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG));

        if let Some(custom_path) = custom_config {
            tracing::debug!("Using custom config file {}", custom_path.display());
            figment = figment.merge(smart_load::auto(custom_path));
        } else {
            if let Some(user_dir) = Self::user_config_dir() {
                for ext in CONFIG_EXTENSIONS {
                    figment = figment.merge(smart_load::auto(user_dir.join(format!("config.{ext}"))));
                }
            }
            for ext in CONFIG_EXTENSIONS {
                figment = figment.merge(smart_load::auto(format!("chatguard.{ext}")));
            }
        }

        // Environment variables always have highest priority
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn user_config_dir() -> Option<PathBuf> {
        std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config").join("chatguard"))
    }
}
