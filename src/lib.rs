//! # chatguard - content guard for listener chat
//!
//! Decides whether a listener's outgoing chat message may be sent, and masks
//! abusive words in messages received from the other party.
//!
//! An outgoing message is refused when it contains:
//!
//! - a word from the forbidden lexicon (Hindi, Hinglish and English), matched
//!   case-insensitively on word boundaries
//! - a link (`https://`, `www.`, or `name.tld` for a known TLD)
//! - a raw phone number (7+ digits in a row)
//! - a phone number split across the last few messages of the conversation
//!
//! ## Library Usage
//!
//! ```rust
//! use chatguard::{ChatMessage, RejectReason, ValidationResult};
//!
//! let recent = vec![ChatMessage::with_text("my number is 98765")];
//! assert_eq!(
//!     chatguard::validate_outgoing("43210", &recent),
//!     ValidationResult::Rejected { reason: RejectReason::FragmentedPhoneNumber },
//! );
//!
//! assert_eq!(chatguard::redact_inbound("tu kutta hai"), "tu ***** hai");
//! ```
//!
//! A guard with a custom lexicon or thresholds is built from [`GuardConfig`]:
//!
//! ```rust,no_run
//! use chatguard::{ContentGuard, GuardConfig};
//!
//! let config = GuardConfig::load()?;
//! let guard = ContentGuard::from_config(&config)?;
//! let verdict = guard.validate_outgoing("hello", &["earlier message"]);
//! assert!(verdict.is_allowed());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod guard;

pub use config::GuardConfig;
pub use guard::{
    ChatMessage, ContentGuard, ForbiddenKind, Lexicon, MessageKind, MessageText, RejectReason,
    SendDecision, ValidationResult,
};

/// Result type alias for chatguard operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");

/// Validate an outgoing message with the built-in guard
///
/// `recent` holds the latest messages of the active conversation in
/// chronological order; the last five take part in split-number detection.
pub fn validate_outgoing<M: MessageText>(candidate: &str, recent: &[M]) -> ValidationResult {
    match ContentGuard::builtin() {
        Ok(guard) => guard.validate_outgoing(candidate, recent),
        // Without a working guard nothing is let through.
        Err(_) => ValidationResult::rejected(RejectReason::ForbiddenContent),
    }
}

/// Mask lexicon words in a received message with the built-in guard
pub fn redact_inbound(text: &str) -> String {
    match ContentGuard::builtin() {
        Ok(guard) => guard.redact_inbound(text),
        Err(_) => text.to_string(),
    }
}
