use serde::{Deserialize, Serialize};
use std::fmt;

/// Why an outgoing message was refused
///
/// Links, raw phone numbers and lexicon words all surface as
/// [`RejectReason::ForbiddenContent`]; the finer [`ForbiddenKind`] is kept
/// for diagnostics only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    ForbiddenContent,
    FragmentedPhoneNumber,
}

impl RejectReason {
    /// Stable reason code
    pub fn code(&self) -> &'static str {
        match self {
            RejectReason::ForbiddenContent => "forbidden_content",
            RejectReason::FragmentedPhoneNumber => "fragmented_phone_number",
        }
    }

    /// Inline warning shown to the listener
    pub fn user_message(&self) -> &'static str {
        match self {
            RejectReason::ForbiddenContent => {
                "Sending links, numbers, or inappropriate language is not allowed."
            }
            RejectReason::FragmentedPhoneNumber => {
                "Sending phone numbers, even in parts, is not allowed."
            }
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Outcome of validating an outgoing message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ValidationResult {
    Allowed,
    Rejected { reason: RejectReason },
}

impl ValidationResult {
    pub fn rejected(reason: RejectReason) -> Self {
        ValidationResult::Rejected { reason }
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, ValidationResult::Allowed)
    }

    pub fn reason(&self) -> Option<RejectReason> {
        match self {
            ValidationResult::Allowed => None,
            ValidationResult::Rejected { reason } => Some(*reason),
        }
    }
}

/// Which matcher class fired inside the forbidden-content check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ForbiddenKind {
    Url,
    PhoneNumber,
    Word,
}

impl ForbiddenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ForbiddenKind::Url => "url",
            ForbiddenKind::PhoneNumber => "phone_number",
            ForbiddenKind::Word => "word",
        }
    }
}

/// What the send path should do with a candidate message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendDecision {
    /// Nothing left after trimming; do not send
    Skip,
    /// Send this (trimmed) text
    Send(String),
    /// Refuse and show the reason's warning
    Block(RejectReason),
}

/// Anything carrying the plain text of a conversation message
pub trait MessageText {
    fn text(&self) -> &str;
}

impl MessageText for str {
    fn text(&self) -> &str {
        self
    }
}

impl MessageText for String {
    fn text(&self) -> &str {
        self.as_str()
    }
}

impl<T: MessageText + ?Sized> MessageText for &T {
    fn text(&self) -> &str {
        (**self).text()
    }
}

/// Kind of a persisted chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    #[default]
    Text,
    Audio,
    Info,
}

/// A message from the active conversation, as the message store hands it out
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub sender_id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, rename = "type")]
    pub kind: MessageKind,
}

impl ChatMessage {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

impl MessageText for ChatMessage {
    fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_codes() {
        assert_eq!(RejectReason::ForbiddenContent.code(), "forbidden_content");
        assert_eq!(
            RejectReason::FragmentedPhoneNumber.to_string(),
            "fragmented_phone_number"
        );
    }

    #[test]
    fn test_validation_result_json_shape() {
        let allowed = serde_json::to_value(ValidationResult::Allowed).unwrap();
        assert_eq!(allowed, serde_json::json!({"status": "allowed"}));

        let rejected =
            serde_json::to_value(ValidationResult::rejected(RejectReason::FragmentedPhoneNumber))
                .unwrap();
        assert_eq!(
            rejected,
            serde_json::json!({"status": "rejected", "reason": "fragmented_phone_number"})
        );
    }

    #[test]
    fn test_chat_message_from_store_json() {
        let msg: ChatMessage = serde_json::from_str(
            r#"{"id": "m1", "senderId": "u42", "text": "hello", "type": "text", "status": "read"}"#,
        )
        .unwrap();
        assert_eq!(msg.sender_id, "u42");
        assert_eq!(MessageText::text(&msg), "hello");

        let audio: ChatMessage = serde_json::from_str(r#"{"type": "audio"}"#).unwrap();
        assert_eq!(audio.kind, MessageKind::Audio);
        assert_eq!(audio.text, "");
    }
}
