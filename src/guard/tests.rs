use super::*;
use crate::config::GuardConfig;

fn guard() -> Arc<ContentGuard> {
    ContentGuard::builtin().expect("built-in guard should compile")
}

fn rejected(reason: RejectReason) -> ValidationResult {
    ValidationResult::rejected(reason)
}

const NO_HISTORY: &[&str] = &[];

#[test]
fn test_plain_greeting_is_allowed() {
    assert_eq!(
        guard().validate_outgoing("Hello, how are you?", NO_HISTORY),
        ValidationResult::Allowed
    );
}

#[test]
fn test_lexicon_word_is_rejected() {
    assert_eq!(
        guard().validate_outgoing("you chutiya", NO_HISTORY),
        rejected(RejectReason::ForbiddenContent)
    );
}

#[test]
fn test_every_lexicon_word_is_rejected_in_any_case() {
    let guard = guard();
    for word in guard.lexicon().words() {
        for text in [
            format!("{word}"),
            format!("tu {} hai", word.to_uppercase()),
            format!("({word})!"),
        ] {
            assert_eq!(
                guard.validate_outgoing(&text, NO_HISTORY),
                rejected(RejectReason::ForbiddenContent),
                "{text:?} should be rejected"
            );
        }
    }
}

#[test]
fn test_link_is_rejected_as_forbidden_content() {
    let guard = guard();
    assert_eq!(
        guard.validate_outgoing("call me at www.example.com", NO_HISTORY),
        rejected(RejectReason::ForbiddenContent)
    );
    assert_eq!(
        guard.explain("call me at www.example.com"),
        Some(ForbiddenKind::Url)
    );
}

#[test]
fn test_raw_number_is_rejected_as_forbidden_content() {
    let guard = guard();
    assert_eq!(
        guard.validate_outgoing("my number 9876543210", NO_HISTORY),
        rejected(RejectReason::ForbiddenContent)
    );
    assert_eq!(guard.explain("9876543210"), Some(ForbiddenKind::PhoneNumber));
}

#[test]
fn test_number_split_across_messages_is_rejected() {
    let recent = vec![ChatMessage::with_text("my number is 98765")];
    assert_eq!(
        guard().validate_outgoing("43210", &recent),
        rejected(RejectReason::FragmentedPhoneNumber)
    );
}

#[test]
fn test_small_numbers_across_messages_are_allowed() {
    let recent = vec![ChatMessage::with_text("I like the number 5")];
    assert_eq!(
        guard().validate_outgoing("I'll call you at 7pm", &recent),
        ValidationResult::Allowed
    );
}

#[test]
fn test_forbidden_content_wins_over_fragments() {
    let recent = ["123", "456"];
    assert_eq!(
        guard().validate_outgoing("chutiya 7", &recent),
        rejected(RejectReason::ForbiddenContent)
    );
}

#[test]
fn test_empty_candidate_is_a_no_op() {
    let guard = guard();
    let recent = ["98765"];
    assert_eq!(guard.validate_outgoing("   \n\t", &recent), ValidationResult::Allowed);
    assert_eq!(guard.check_send("   ", &recent), SendDecision::Skip);
}

#[test]
fn test_check_send_trims_and_reports() {
    let guard = guard();
    assert_eq!(
        guard.check_send("  hi there  ", NO_HISTORY),
        SendDecision::Send("hi there".to_string())
    );
    assert_eq!(
        guard.check_send("visit example.in", NO_HISTORY),
        SendDecision::Block(RejectReason::ForbiddenContent)
    );
    assert_eq!(
        guard.check_send("3210", &["98", "765"]),
        SendDecision::Block(RejectReason::FragmentedPhoneNumber)
    );
}

#[test]
fn test_only_the_last_window_counts() {
    let guard = guard();
    assert_eq!(guard.history_window(), 5);

    // Six older messages carry digits, but only the last five are considered
    let recent = ["1234", "hi", "hello", "how", "are", "you"];
    assert_eq!(guard.validate_outgoing("567", &recent), ValidationResult::Allowed);

    let recent = ["1234", "hi", "hello", "how", "are"];
    assert_eq!(
        guard.validate_outgoing("567", &recent),
        rejected(RejectReason::FragmentedPhoneNumber)
    );
}

#[test]
fn test_redact_inbound_masks_words_and_keeps_length() {
    let guard = guard();
    let text = "Tu KAMINA hai, sach mein kamina.";
    let masked = guard.redact_inbound(text);

    assert_eq!(masked, "Tu ****** hai, sach mein ******.");
    assert_eq!(masked.chars().count(), text.chars().count());
}

#[test]
fn test_redact_inbound_is_idempotent() {
    let guard = guard();
    for text in [
        "",
        "nothing to see",
        "sexy sex chut chutney",
        "bc mc BC, mc!",
        "नमस्ते randi नमस्ते",
    ] {
        let once = guard.redact_inbound(text);
        let twice = guard.redact_inbound(&once);
        assert_eq!(once, twice, "{text:?}");
        assert_eq!(once.chars().count(), text.chars().count(), "{text:?}");
    }
}

#[test]
fn test_redact_leaves_links_and_numbers_alone() {
    let text = "www.example.com 9876543210";
    assert_eq!(guard().redact_inbound(text), text);
}

#[test]
fn test_display_text_only_redacts_other_party() {
    let guard = guard();
    assert_eq!(guard.display_text("tu kutta", true), "tu kutta");
    assert_eq!(guard.display_text("tu kutta", false), "tu *****");
}

#[test]
fn test_results_are_deterministic() {
    let guard = guard();
    let recent = ["abc"];
    let first: Vec<_> = ["you chutiya", "hello", "see www.x.com", "hello"]
        .iter()
        .map(|t| guard.validate_outgoing(t, &recent))
        .collect();
    for _ in 0..5 {
        let again: Vec<_> = ["you chutiya", "hello", "see www.x.com", "hello"]
            .iter()
            .map(|t| guard.validate_outgoing(t, &recent))
            .collect();
        assert_eq!(first, again);
    }
    assert_eq!(first[1], ValidationResult::Allowed);
    assert_eq!(first[3], ValidationResult::Allowed);
}

#[test]
fn test_mixed_script_words_are_rejected_and_redacted() {
    let guard = guard();
    for (text, masked) in [
        ("tu chutiyaहै", "tu *******है"),
        ("तूchutiya", "तू*******"),
        ("kuttaजी", "*****जी"),
    ] {
        assert_eq!(
            guard.validate_outgoing(text, NO_HISTORY),
            rejected(RejectReason::ForbiddenContent),
            "{text:?}"
        );
        assert_eq!(guard.redact_inbound(text), masked);
    }
}

#[test]
fn test_number_glued_to_hindi_is_forbidden_content() {
    let guard = guard();
    assert_eq!(
        guard.validate_outgoing("फ़ोन9876543210", NO_HISTORY),
        rejected(RejectReason::ForbiddenContent)
    );
    assert_eq!(guard.explain("फ़ोन9876543210"), Some(ForbiddenKind::PhoneNumber));
}

#[test]
fn test_builtin_uses_embedded_defaults() {
    let embedded = GuardConfig::embedded().unwrap();
    let guard = guard();
    assert_eq!(guard.history_window(), embedded.guard.history_window);
    assert_eq!(guard.min_phone_digits(), embedded.guard.min_phone_digits);
    assert_eq!(guard.mask(), embedded.redaction.mask);
}

#[test]
fn test_builtin_is_shared() {
    assert!(Arc::ptr_eq(&guard(), &guard()));
}

#[test]
fn test_guard_from_custom_config() {
    let mut config = GuardConfig::default();
    config.guard.history_window = 2;
    config.guard.min_phone_digits = 4;
    config.lexicon.extra_words = vec!["bakwas".to_string()];
    config.lexicon.exclude_words = vec!["mc".to_string()];
    config.redaction.mask = '#';

    let guard = ContentGuard::from_config(&config).unwrap();

    assert_eq!(
        guard.validate_outgoing("total bakwas", NO_HISTORY),
        rejected(RejectReason::ForbiddenContent)
    );
    assert_eq!(guard.validate_outgoing("mc", NO_HISTORY), ValidationResult::Allowed);
    assert_eq!(
        guard.validate_outgoing("34", &["1", "2"]),
        rejected(RejectReason::FragmentedPhoneNumber)
    );
    assert_eq!(guard.validate_outgoing("34", &["1", "x", "y"]), ValidationResult::Allowed);
    assert_eq!(guard.redact_inbound("bakwas"), "######");
}

#[test]
fn test_guard_rejects_invalid_config() {
    let mut config = GuardConfig::default();
    config.redaction.mask = 'a';
    assert!(ContentGuard::from_config(&config).is_err());
}

#[test]
fn test_guard_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ContentGuard>();

    let guard = guard();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let guard = Arc::clone(&guard);
            std::thread::spawn(move || guard.validate_outgoing("you chutiya", NO_HISTORY))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), rejected(RejectReason::ForbiddenContent));
    }
}
