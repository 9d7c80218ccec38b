use std::fmt;

use crate::games::hangman::ledger::Letter;

/// The secret word of a session. Stored as read, compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word(String);

impl Word {
    /// Parse a dictionary line or saved word. Surrounding whitespace is
    /// dropped; everything left must be an ASCII letter.
    pub fn parse(raw: &str) -> Option<Self> {
        let text = raw.trim();
        if text.is_empty() || !text.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        Some(Self(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }

    pub fn contains_letter(&self, letter: Letter) -> bool {
        self.0.chars().any(|c| letter.matches(c))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_and_keeps_case() {
        let word = Word::parse("  Apple\r").unwrap();
        assert_eq!(word.as_str(), "Apple");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn parse_rejects_non_letters() {
        assert!(Word::parse("").is_none());
        assert!(Word::parse("   ").is_none());
        assert!(Word::parse("can't").is_none());
        assert!(Word::parse("two words").is_none());
    }

    #[test]
    fn letter_lookup_ignores_case() {
        let word = Word::parse("Apple").unwrap();
        assert!(word.contains_letter(Letter::new('a').unwrap()));
        assert!(word.contains_letter(Letter::new('P').unwrap()));
        assert!(!word.contains_letter(Letter::new('z').unwrap()));
    }
}
