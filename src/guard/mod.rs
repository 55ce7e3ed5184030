//! Content guard for listener chat messages
//!
//! Decides whether an outgoing message may be sent and masks abusive words in
//! incoming messages before they are shown:
//!
//! - [`lexicon`]: the forbidden-word list, embedded or loaded from a file
//! - [`patterns`]: word, link and phone-number matchers for a single message
//! - [`fragments`]: phone numbers split across the recent conversation
//! - [`redact`]: display-time masking of received messages
//!
//! A [`ContentGuard`] holds only compiled, immutable matchers. Every call is a
//! pure function of its arguments, so one guard can be shared across threads.

pub mod fragments;
pub mod lexicon;
pub mod patterns;
pub mod redact;
pub mod types;

#[cfg(test)]
mod tests;

use anyhow::Result;
use std::borrow::Cow;
use std::sync::{Arc, LazyLock};

use crate::config::GuardConfig;

pub use fragments::FragmentDetector;
pub use lexicon::Lexicon;
pub use patterns::ForbiddenPatterns;
pub use redact::Redactor;
pub use types::{
    ChatMessage, ForbiddenKind, MessageKind, MessageText, RejectReason, SendDecision,
    ValidationResult,
};

/// Built-in guard from the embedded defaults, compiled once and shared by every caller
static BUILTIN_GUARD: LazyLock<Option<Arc<ContentGuard>>> = LazyLock::new(|| {
    match GuardConfig::embedded().and_then(|config| ContentGuard::from_config(&config)) {
        Ok(guard) => Some(Arc::new(guard)),
        Err(e) => {
            tracing::error!("Failed to build built-in content guard: {:#}", e);
            None
        }
    }
});

/// Outgoing validator and inbound redactor
#[derive(Debug, Clone)]
pub struct ContentGuard {
    lexicon: Lexicon,
    patterns: ForbiddenPatterns,
    fragments: FragmentDetector,
    redactor: Redactor,
    history_window: usize,
}

impl ContentGuard {
    /// Shared guard built from the embedded `default-config.toml`
    pub fn builtin() -> Result<Arc<ContentGuard>> {
        BUILTIN_GUARD
            .as_ref()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Built-in content guard is unavailable"))
    }

    /// Build a guard from configuration, resolving the lexicon it names
    pub fn from_config(config: &GuardConfig) -> Result<Self> {
        config.validate()?;
        let lexicon = Lexicon::from_config(&config.lexicon)?;
        Self::new(lexicon, config)
    }

    /// Build a guard around an already resolved lexicon
    pub fn new(lexicon: Lexicon, config: &GuardConfig) -> Result<Self> {
        let patterns = ForbiddenPatterns::new(
            &lexicon,
            &config.urls.tlds,
            config.guard.min_phone_digits,
        )?;
        let redactor = Redactor::new(patterns.word_regex().cloned(), config.redaction.mask);

        Ok(Self {
            lexicon,
            patterns,
            fragments: FragmentDetector::new(config.guard.min_phone_digits),
            redactor,
            history_window: config.guard.history_window,
        })
    }

    /// Decide whether `candidate` may be sent
    ///
    /// 1. An empty (after trim) candidate is `Allowed`; sending nothing is the caller's call.
    /// 2. Words, links and raw numbers in the trimmed candidate reject with
    ///    [`RejectReason::ForbiddenContent`].
    /// 3. A phone number spelled out across the last `history_window` entries
    ///    of `recent` plus the candidate rejects with
    ///    [`RejectReason::FragmentedPhoneNumber`].
    ///
    /// `recent` is in chronological order; older entries beyond the window are ignored.
    pub fn validate_outgoing<M: MessageText>(&self, candidate: &str, recent: &[M]) -> ValidationResult {
        let candidate = candidate.trim();
        if candidate.is_empty() {
            return ValidationResult::Allowed;
        }

        if let Some(kind) = self.patterns.find_forbidden(candidate) {
            tracing::debug!(kind = kind.as_str(), "Rejected outgoing message");
            return ValidationResult::rejected(RejectReason::ForbiddenContent);
        }

        let window = &recent[recent.len().saturating_sub(self.history_window)..];
        if self.fragments.detect(window, candidate) {
            tracing::debug!(window = window.len(), "Rejected outgoing message: split phone number");
            return ValidationResult::rejected(RejectReason::FragmentedPhoneNumber);
        }

        ValidationResult::Allowed
    }

    /// Trim, skip empty input, and validate: what a send button should do
    pub fn check_send<M: MessageText>(&self, candidate: &str, recent: &[M]) -> SendDecision {
        let trimmed = candidate.trim();
        if trimmed.is_empty() {
            return SendDecision::Skip;
        }

        match self.validate_outgoing(trimmed, recent) {
            ValidationResult::Allowed => SendDecision::Send(trimmed.to_string()),
            ValidationResult::Rejected { reason } => SendDecision::Block(reason),
        }
    }

    /// The diagnostic class behind a `ForbiddenContent` rejection, if any
    pub fn explain(&self, candidate: &str) -> Option<ForbiddenKind> {
        self.patterns.find_forbidden(candidate.trim())
    }

    /// Mask lexicon words in a message received from the other party
    pub fn redact_inbound(&self, text: &str) -> String {
        self.redactor.redact(text).into_owned()
    }

    /// Text to render for a message: own messages as written, others redacted
    pub fn display_text<'a>(&self, text: &'a str, own_message: bool) -> Cow<'a, str> {
        if own_message {
            Cow::Borrowed(text)
        } else {
            self.redactor.redact(text)
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn history_window(&self) -> usize {
        self.history_window
    }

    pub fn min_phone_digits(&self) -> usize {
        self.fragments.min_digits()
    }

    pub fn mask(&self) -> char {
        self.redactor.mask()
    }
}
