use super::types::MessageText;

/// Catches phone numbers split over several messages ("98765" then "43210")
///
/// The recent texts and the candidate are joined with spaces and every
/// non-digit is dropped before looking for a digit run. Unrelated short
/// numbers sent close together can therefore add up to a rejection; that
/// false positive is accepted in exchange for not missing split numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FragmentDetector {
    min_digits: usize,
}

impl FragmentDetector {
    pub fn new(min_digits: usize) -> Self {
        Self { min_digits }
    }

    pub fn min_digits(&self) -> usize {
        self.min_digits
    }

    /// True when the window plus the candidate spells out a phone number
    pub fn detect<M: MessageText>(&self, recent: &[M], candidate: &str) -> bool {
        let digits = window_digits(recent, candidate);
        // Only digits survive the strip, so the longest run is the whole string.
        let found = digits.len() >= self.min_digits;
        if found {
            tracing::debug!(
                digits = digits.len(),
                messages = recent.len() + 1,
                "Digit run across recent messages reached the phone number threshold"
            );
        }
        found
    }
}

/// ASCII digits of `recent` and `candidate` joined with spaces, in order
pub fn window_digits<M: MessageText>(recent: &[M], candidate: &str) -> String {
    recent
        .iter()
        .map(|m| m.text())
        .chain(std::iter::once(candidate))
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .filter(char::is_ascii_digit)
        .collect()
}
