use tracing::{debug, info};

use crate::core::input::InputSource;
use crate::core::renderer::Presenter;
use crate::error::{HangmanError, SessionError};
use crate::games::hangman::ledger::{GuessLedger, Letter, Outcome};
use crate::games::hangman::reveal::RevealState;
use crate::games::hangman::save::{self, SaveRecord};
use crate::games::hangman::validate::{self, GuessToken};
use crate::games::hangman::word::Word;

pub const INITIAL_ATTEMPTS: u32 = 10;

/// Incorrect guesses still allowed before the game is lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptBudget(u32);

impl AttemptBudget {
    pub fn new(attempts: u32) -> Self {
        Self(attempts)
    }

    pub fn remaining(self) -> u32 {
        self.0
    }

    pub fn is_exhausted(self) -> bool {
        self.0 == 0
    }

    pub fn spend(&mut self) {
        self.0 = self.0.saturating_sub(1);
    }
}

impl Default for AttemptBudget {
    fn default() -> Self {
        Self(INITIAL_ATTEMPTS)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Playing,
    Won,
    Lost,
    SavedMidGame,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Won,
    Lost,
}

/// How a call to [`GameSession::play`] ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    Finished(Verdict),
    Saved(SaveRecord),
}

/// One game of hangman, from the first guess to a win, a loss or a save.
#[derive(Debug, Clone)]
pub struct GameSession {
    word: Word,
    ledger: GuessLedger,
    reveal: RevealState,
    budget: AttemptBudget,
    state: SessionState,
    resumed: bool,
}

impl GameSession {
    pub fn new(word: Word) -> Self {
        Self::with_attempts(word, INITIAL_ATTEMPTS)
    }

    pub fn with_attempts(word: Word, attempts: u32) -> Self {
        let reveal = RevealState::hidden(word.len());
        Self {
            word,
            ledger: GuessLedger::new(),
            reveal,
            budget: AttemptBudget::new(attempts),
            state: SessionState::Playing,
            resumed: false,
        }
    }

    /// Build a fresh session from a saved record.
    pub fn from_save(record: &SaveRecord) -> Result<Self, HangmanError> {
        save::decode(record)
    }

    pub(crate) fn restore(
        word: Word,
        ledger: GuessLedger,
        reveal: RevealState,
        budget: AttemptBudget,
    ) -> Self {
        Self {
            word,
            ledger,
            reveal,
            budget,
            state: SessionState::Playing,
            resumed: true,
        }
    }

    pub fn word(&self) -> &Word {
        &self.word
    }

    pub fn ledger(&self) -> &GuessLedger {
        &self.ledger
    }

    pub fn reveal(&self) -> &RevealState {
        &self.reveal
    }

    pub fn attempts_left(&self) -> u32 {
        self.budget.remaining()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn resumed(&self) -> bool {
        self.resumed
    }

    /// Apply one already validated letter.
    pub fn guess(&mut self, letter: Letter) -> Result<Outcome, SessionError> {
        self.ensure_playing()?;
        let outcome = Outcome::of(&self.word, letter);
        self.ledger.record(letter, outcome)?;

        match outcome {
            Outcome::Correct => {
                self.reveal.apply_correct(&self.word, letter);
                if self.reveal.is_complete() {
                    self.state = SessionState::Won;
                }
            }
            Outcome::Incorrect => {
                self.budget.spend();
                if self.budget.is_exhausted() {
                    self.state = SessionState::Lost;
                }
            }
        }

        debug!(
            %letter,
            ?outcome,
            attempts_left = self.budget.remaining(),
            unrevealed = self.ledger.remaining_letters_of(&self.word).len(),
            "guess applied"
        );
        Ok(outcome)
    }

    /// Stop playing and snapshot the session. Attempts and reveal state are
    /// untouched.
    pub fn request_save(&mut self) -> Result<SaveRecord, SessionError> {
        self.ensure_playing()?;
        self.state = SessionState::SavedMidGame;
        Ok(save::encode(self))
    }

    /// Run turns until the game is won, lost or saved.
    pub fn play(
        &mut self,
        input: &mut dyn InputSource,
        presenter: &mut dyn Presenter,
    ) -> Result<SessionEnd, HangmanError> {
        self.ensure_playing()?;
        presenter.game_started(self.resumed)?;
        info!(resumed = self.resumed, length = self.word.len(), "game started");

        let end = loop {
            presenter.word_length(self.word.len())?;
            presenter.guesses_left(self.budget.remaining())?;
            presenter.masked_word(&self.reveal.render())?;
            presenter.guess_history(&self.ledger)?;
            presenter.prompt_guess()?;

            let ledger = &self.ledger;
            let token = validate::read_valid(input, presenter, |raw| {
                validate::guess_token(raw, ledger)
            })?;

            match token {
                GuessToken::Save => break SessionEnd::Saved(self.request_save()?),
                GuessToken::Letter(letter) => {
                    let outcome = self.guess(letter)?;
                    presenter.guess_feedback(outcome)?;
                    match self.state {
                        SessionState::Won => break SessionEnd::Finished(Verdict::Won),
                        SessionState::Lost => break SessionEnd::Finished(Verdict::Lost),
                        _ => {}
                    }
                }
            }
        };

        presenter.masked_word(&self.reveal.render())?;
        if let SessionEnd::Finished(verdict) = &end {
            info!(?verdict, "game finished");
            presenter.game_result(*verdict, &self.word)?;
        }
        Ok(end)
    }

    fn ensure_playing(&self) -> Result<(), SessionError> {
        match self.state {
            SessionState::Playing => Ok(()),
            other => Err(SessionError::NotPlaying(other)),
        }
    }
}
