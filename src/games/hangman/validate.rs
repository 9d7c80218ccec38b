//! Grammar checks for every line the player types. Each check either hands
//! back the accepted value or a [`Rejection`]; callers re-prompt on rejection.

use tracing::debug;

use crate::core::input::InputSource;
use crate::core::renderer::Presenter;
use crate::error::HangmanError;
use crate::games::hangman::ledger::{GuessLedger, Letter};

/// Typed at the guess prompt to save the game instead of guessing.
pub const SAVE_TOKEN: &str = "save";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    NotOneOrTwo,
    AlreadyGuessed,
    NotSingleLetter,
    OutOfRange,
    EmptyOrInvalidStart,
    NotYesOrNo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    NewGame,
    LoadGame,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessToken {
    Save,
    Letter(Letter),
}

pub fn menu_choice(raw: &str) -> Result<MenuChoice, Rejection> {
    match raw {
        "1" => Ok(MenuChoice::NewGame),
        "2" => Ok(MenuChoice::LoadGame),
        _ => Err(Rejection::NotOneOrTwo),
    }
}

/// Repetition is checked before shape, so a repeated letter is always
/// reported as such.
pub fn guess_token(raw: &str, ledger: &GuessLedger) -> Result<GuessToken, Rejection> {
    let letter = Letter::from_token(raw);
    if letter.is_some_and(|l| ledger.has_guessed(l)) {
        return Err(Rejection::AlreadyGuessed);
    }
    if raw == SAVE_TOKEN {
        return Ok(GuessToken::Save);
    }
    letter.map(GuessToken::Letter).ok_or(Rejection::NotSingleLetter)
}

/// 1-based index into a listing of `count` entries; returns it 1-based.
pub fn slot_index(raw: &str, count: usize) -> Result<usize, Rejection> {
    match raw.parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Ok(n),
        _ => Err(Rejection::OutOfRange),
    }
}

pub fn file_name(raw: &str) -> Result<&str, Rejection> {
    match raw.chars().next() {
        Some(c) if c.is_alphabetic() => Ok(raw),
        _ => Err(Rejection::EmptyOrInvalidStart),
    }
}

pub fn play_again(raw: &str) -> Result<bool, Rejection> {
    if raw.eq_ignore_ascii_case("yes") {
        Ok(true)
    } else if raw.eq_ignore_ascii_case("no") {
        Ok(false)
    } else {
        Err(Rejection::NotYesOrNo)
    }
}

/// Read lines until one passes `check`, reporting each rejection.
pub fn read_valid<T>(
    input: &mut dyn InputSource,
    presenter: &mut dyn Presenter,
    mut check: impl FnMut(&str) -> Result<T, Rejection>,
) -> Result<T, HangmanError> {
    loop {
        let line = input.next_line()?.ok_or(HangmanError::InputClosed)?;
        match check(&line) {
            Ok(value) => return Ok(value),
            Err(rejection) => {
                debug!(?rejection, "input rejected");
                presenter.invalid_input(rejection)?;
            }
        }
    }
}
