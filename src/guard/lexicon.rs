//! Forbidden-word lexicon
//!
//! The built-in list ships as `assets/lexicon.yaml` and is embedded at compile
//! time. Deployments can replace it with their own file or add and remove
//! words through configuration without touching the matcher.

use anyhow::{Context, Result};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::config::{LexiconConfig, smart_load};

const EMBEDDED_LEXICON: &str = include_str!("../../assets/lexicon.yaml");

/// Lexicon file layout: a flat `words` list, named `categories`, or both
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LexiconFile {
    #[serde(default)]
    pub words: Vec<String>,
    #[serde(default)]
    pub categories: Vec<LexiconCategory>,
}

/// Named group of words. The category is informational; matching is flat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconCategory {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub words: Vec<String>,
}

impl LexiconFile {
    fn into_words(self) -> impl Iterator<Item = String> {
        self.words
            .into_iter()
            .chain(self.categories.into_iter().flat_map(|c| c.words))
    }
}

/// Immutable, ordered set of lowercased forbidden words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    words: Vec<String>,
}

impl Lexicon {
    /// Build from raw words: trimmed, lowercased, empties and duplicates dropped
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Self::default();
        lexicon.push_all(words);
        lexicon
    }

    /// The embedded default lexicon
    pub fn builtin() -> Result<Self> {
        let file: LexiconFile = serde_yml::from_str(EMBEDDED_LEXICON)
            .context("Failed to parse embedded lexicon YAML")?;
        let lexicon = Self::from_words(file.into_words());
        tracing::debug!("Loaded {} built-in lexicon words", lexicon.len());
        Ok(lexicon)
    }

    /// Load a lexicon file (toml, json or yaml)
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!("Lexicon file not found: {}", path.display());
        }

        let file: LexiconFile = Figment::from(smart_load::auto(path))
            .extract()
            .with_context(|| format!("Failed to parse lexicon file: {}", path.display()))?;

        let lexicon = Self::from_words(file.into_words());
        tracing::debug!("Loaded {} lexicon words from {}", lexicon.len(), path.display());
        Ok(lexicon)
    }

    /// Resolve the effective lexicon for a configuration
    pub fn from_config(config: &LexiconConfig) -> Result<Self> {
        let base = match &config.path {
            Some(path) => Self::from_file(path)?,
            None => Self::builtin()?,
        };

        Ok(base
            .extend(&config.extra_words)
            .exclude(&config.exclude_words))
    }

    /// Add words, keeping existing order
    pub fn extend<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.push_all(words);
        self
    }

    /// Remove words (compared after normalization)
    pub fn exclude<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let removed: HashSet<String> = words
            .into_iter()
            .filter_map(|w| normalize(w.as_ref()))
            .collect();
        if !removed.is_empty() {
            self.words.retain(|w| !removed.contains(w));
        }
        self
    }

    pub fn contains(&self, word: &str) -> bool {
        normalize(word).is_some_and(|w| self.words.contains(&w))
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn push_all<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            if let Some(word) = normalize(word.as_ref()) {
                if !self.words.contains(&word) {
                    self.words.push(word);
                }
            }
        }
    }
}

fn normalize(word: &str) -> Option<String> {
    let word = word.trim();
    (!word.is_empty()).then(|| word.to_lowercase())
}
