//! Property tests for the session state machine and its save records.
//!
//! Properties tested:
//! - Guessing every letter of the word wins without spending attempts
//! - Ten distinct misses lose a fresh game, one attempt at a time
//! - Any in-progress session survives encode then decode unchanged
//! - Guess case never changes what gets revealed

use proptest::prelude::*;
use proptest::sample::subsequence;

use crate::games::hangman::game::{GameSession, SessionState, INITIAL_ATTEMPTS};
use crate::games::hangman::ledger::{Letter, Outcome};
use crate::games::hangman::save::{decode, encode};
use crate::games::hangman::word::Word;

fn word() -> impl Strategy<Value = Word> {
    "[a-zA-Z]{1,12}".prop_map(|s| Word::parse(&s).unwrap())
}

/// Every letter of the alphabet, in random order.
fn alphabet() -> impl Strategy<Value = Vec<Letter>> {
    let letters: Vec<Letter> = ('a'..='z').filter_map(Letter::new).collect();
    subsequence(letters, 26).prop_shuffle()
}

proptest! {
    /// Property: distinct correct guesses covering the word win it
    #[test]
    fn prop_covering_guesses_win(word in word(), order in alphabet()) {
        let hits: Vec<Letter> = order.into_iter().filter(|&l| word.contains_letter(l)).collect();
        let mut session = GameSession::new(word);

        for (i, &letter) in hits.iter().enumerate() {
            prop_assert_eq!(session.state(), SessionState::Playing);
            prop_assert_eq!(session.guess(letter), Ok(Outcome::Correct));
            prop_assert_eq!(session.reveal().is_complete(), i + 1 == hits.len());
        }

        prop_assert_eq!(session.state(), SessionState::Won);
        prop_assert_eq!(session.attempts_left(), INITIAL_ATTEMPTS);
        prop_assert!(session.ledger().remaining_letters_of(session.word()).is_empty());
    }

    /// Property: exactly the initial budget of misses loses the game
    #[test]
    fn prop_budget_of_misses_loses(word in word(), order in alphabet()) {
        let misses: Vec<Letter> = order
            .into_iter()
            .filter(|&l| !word.contains_letter(l))
            .take(INITIAL_ATTEMPTS as usize)
            .collect();
        prop_assert_eq!(misses.len(), INITIAL_ATTEMPTS as usize);
        let mut session = GameSession::new(word);

        for (i, &letter) in misses.iter().enumerate() {
            prop_assert_eq!(session.state(), SessionState::Playing);
            prop_assert_eq!(session.guess(letter), Ok(Outcome::Incorrect));
            prop_assert_eq!(session.attempts_left(), INITIAL_ATTEMPTS - 1 - i as u32);
        }

        prop_assert_eq!(session.state(), SessionState::Lost);
        prop_assert!(session.reveal().render().iter().all(|t| t == "_"));
    }

    /// Property: decode(encode(s)) restores an equivalent session
    #[test]
    fn prop_save_round_trip(word in word(), order in alphabet(), count in 0usize..=26) {
        let mut session = GameSession::new(word);
        for letter in order.into_iter().take(count) {
            let mut next = session.clone();
            next.guess(letter).unwrap();
            if next.state() == SessionState::Playing {
                session = next;
            }
        }

        let restored = decode(&encode(&session)).unwrap();

        prop_assert_eq!(restored.word(), session.word());
        prop_assert_eq!(restored.reveal().render(), session.reveal().render());
        prop_assert_eq!(restored.attempts_left(), session.attempts_left());
        prop_assert_eq!(restored.ledger(), session.ledger());
        prop_assert_eq!(restored.state(), SessionState::Playing);
    }

    /// Property: upper and lower case guesses reveal the same cells
    #[test]
    fn prop_guess_case_is_ignored(word in word(), c in proptest::char::range('a', 'z')) {
        let mut lower = GameSession::new(word.clone());
        let mut upper = GameSession::new(word);

        let a = lower.guess(Letter::new(c).unwrap());
        let b = upper.guess(Letter::new(c.to_ascii_uppercase()).unwrap());

        prop_assert_eq!(a, b);
        prop_assert_eq!(lower.reveal(), upper.reveal());
        prop_assert_eq!(lower.attempts_left(), upper.attempts_left());
    }
}
