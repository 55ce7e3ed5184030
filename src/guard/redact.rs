use regex::{Captures, Regex};
use std::borrow::Cow;

/// Masks lexicon words in messages received from the other party
///
/// Each matched word becomes one mask character per character of the
/// match. Everything outside a match is copied through untouched.
/// Display-only: it never blocks or alters delivery.
#[derive(Debug, Clone)]
pub struct Redactor {
    words: Option<Regex>,
    mask: char,
}

impl Redactor {
    pub fn new(words: Option<Regex>, mask: char) -> Self {
        Self { words, mask }
    }

    pub fn mask(&self) -> char {
        self.mask
    }

    pub fn redact<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let Some(re) = &self.words else {
            return Cow::Borrowed(text);
        };

        re.replace_all(text, |caps: &Captures<'_>| {
            let len = caps[0].chars().count();
            std::iter::repeat_n(self.mask, len).collect::<String>()
        })
    }
}
