use anyhow::{Context, Result};
use regex::Regex;

use super::lexicon::Lexicon;
use super::types::ForbiddenKind;

/// Compiled forbidden-content matchers
///
/// Three independent classes fold into one decision:
/// - lexicon words, whole-word (ASCII boundaries) and case-insensitive
/// - links: `scheme://`, `www.`, or `name.tld` for the configured TLDs
/// - raw phone numbers: a standalone run of at least `min_phone_digits` digits
///
/// `Regex` keeps no match position between calls, so every check is
/// independent of the ones before it.
#[derive(Debug, Clone)]
pub struct ForbiddenPatterns {
    /// `None` when the lexicon is empty
    words: Option<Regex>,
    url: Regex,
    phone: Regex,
}

impl ForbiddenPatterns {
    pub fn new(lexicon: &Lexicon, tlds: &[String], min_phone_digits: usize) -> Result<Self> {
        let words = word_pattern(lexicon)
            .map(|source| Regex::new(&source).context("Failed to compile lexicon pattern"))
            .transpose()?;

        let url_source = url_pattern(tlds);
        let url = Regex::new(&url_source)
            .with_context(|| format!("Invalid URL pattern: {url_source}"))?;

        let phone = Regex::new(&format!(r"{BOUNDARY}[0-9]{{{min_phone_digits},}}{BOUNDARY}"))
            .context("Failed to compile phone number pattern")?;

        tracing::debug!(
            words = lexicon.len(),
            tlds = tlds.len(),
            min_phone_digits,
            "Compiled forbidden content patterns"
        );

        Ok(Self { words, url, phone })
    }

    /// First matcher class that fires, checked as links, phone numbers, then words
    pub fn find_forbidden(&self, text: &str) -> Option<ForbiddenKind> {
        if self.url.is_match(text) {
            Some(ForbiddenKind::Url)
        } else if self.phone.is_match(text) {
            Some(ForbiddenKind::PhoneNumber)
        } else if self.contains_word(text) {
            Some(ForbiddenKind::Word)
        } else {
            None
        }
    }

    pub fn is_forbidden(&self, text: &str) -> bool {
        self.find_forbidden(text).is_some()
    }

    pub fn contains_word(&self, text: &str) -> bool {
        self.words.as_ref().is_some_and(|re| re.is_match(text))
    }

    /// Lexicon regex, used by the redactor
    pub(crate) fn word_regex(&self) -> Option<&Regex> {
        self.words.as_ref()
    }
}

/// ASCII word boundary: any non-ASCII letter counts as a separator, so a word
/// glued to Devanagari or accented text is still a whole word.
const BOUNDARY: &str = r"(?-u:\b)";

fn word_pattern(lexicon: &Lexicon) -> Option<String> {
    if lexicon.is_empty() {
        return None;
    }
    let alternation = lexicon
        .words()
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    Some(format!(r"(?i){BOUNDARY}(?:{alternation}){BOUNDARY}"))
}

fn url_pattern(tlds: &[String]) -> String {
    let schemes = r"(?:https?|ftp)://|www\.";
    if tlds.is_empty() {
        return format!(r"(?i)(?:{schemes})\S*");
    }
    let tlds = tlds
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");
    format!(r"(?i)(?:{schemes}|[a-z0-9.-]+\.(?:{tlds}))\S*")
}
