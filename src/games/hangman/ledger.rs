use std::fmt;

use crate::error::DuplicateGuess;
use crate::games::hangman::word::Word;

/// A single guessed letter. Identity is the lowercase ASCII letter, so `A`
/// and `a` are the same guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Letter(char);

impl Letter {
    pub fn new(c: char) -> Option<Self> {
        c.is_ascii_alphabetic().then_some(Self(c.to_ascii_lowercase()))
    }

    /// Accepts a string holding exactly one letter.
    pub fn from_token(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::new(c),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        self.0
    }

    pub fn matches(self, c: char) -> bool {
        c.eq_ignore_ascii_case(&self.0)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
}

impl Outcome {
    pub fn of(word: &Word, letter: Letter) -> Self {
        if word.contains_letter(letter) {
            Outcome::Correct
        } else {
            Outcome::Incorrect
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guess {
    pub letter: Letter,
    pub outcome: Outcome,
}

/// Ordered guess history, unique by letter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessLedger {
    guesses: Vec<Guess>,
}

impl GuessLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_guessed(&self, letter: Letter) -> bool {
        self.guesses.iter().any(|g| g.letter == letter)
    }

    pub fn record(&mut self, letter: Letter, outcome: Outcome) -> Result<(), DuplicateGuess> {
        if self.has_guessed(letter) {
            return Err(DuplicateGuess(letter.as_char()));
        }
        self.guesses.push(Guess { letter, outcome });
        Ok(())
    }

    /// Characters of `word` (in order, original case) whose letter has not
    /// been guessed correctly yet. Empty once the word is solved.
    pub fn remaining_letters_of(&self, word: &Word) -> Vec<char> {
        word.chars()
            .filter(|&c| {
                !self
                    .guesses
                    .iter()
                    .any(|g| g.outcome == Outcome::Correct && g.letter.matches(c))
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Guess> {
        self.guesses.iter()
    }

    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.guesses.iter().map(|g| g.letter)
    }

    pub fn len(&self) -> usize {
        self.guesses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guesses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    #[test]
    fn letters_are_case_insensitive() {
        assert_eq!(letter('Q'), letter('q'));
        assert_eq!(letter('Q').as_char(), 'q');
        assert!(Letter::new('1').is_none());
        assert!(Letter::from_token("ab").is_none());
        assert!(Letter::from_token("").is_none());
        assert_eq!(Letter::from_token("B"), Some(letter('b')));
    }

    #[test]
    fn record_rejects_repeats_in_any_case() {
        let mut ledger = GuessLedger::new();
        ledger.record(letter('a'), Outcome::Correct).unwrap();

        assert!(ledger.has_guessed(letter('A')));
        assert_eq!(
            ledger.record(letter('A'), Outcome::Correct),
            Err(DuplicateGuess('a'))
        );
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn remaining_letters_shrink_with_correct_guesses() {
        let word = Word::parse("Banana").unwrap();
        let mut ledger = GuessLedger::new();
        assert_eq!(ledger.remaining_letters_of(&word).len(), 6);

        ledger.record(letter('a'), Outcome::Correct).unwrap();
        ledger.record(letter('z'), Outcome::Incorrect).unwrap();
        assert_eq!(ledger.remaining_letters_of(&word), vec!['B', 'n', 'n']);

        ledger.record(letter('b'), Outcome::Correct).unwrap();
        ledger.record(letter('n'), Outcome::Correct).unwrap();
        assert!(ledger.remaining_letters_of(&word).is_empty());
    }

    #[test]
    fn outcome_follows_word_membership() {
        let word = Word::parse("cat").unwrap();
        assert_eq!(Outcome::of(&word, letter('C')), Outcome::Correct);
        assert_eq!(Outcome::of(&word, letter('z')), Outcome::Incorrect);
    }
}
