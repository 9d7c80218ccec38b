/// Outer process loop: menu, new or loaded game, save, play again.
use std::path::PathBuf;

use tracing::{info, warn};

use crate::core::input::InputSource;
use crate::core::renderer::Presenter;
use crate::error::HangmanError;
use crate::games::hangman::dictionary::WordSource;
use crate::games::hangman::game::{GameSession, SessionEnd};
use crate::games::hangman::save::{self, SaveRecord};
use crate::games::hangman::validate::{self, MenuChoice};

/// Owns the collaborators and at most one live [`GameSession`] at a time.
pub struct Driver<'a> {
    input: &'a mut dyn InputSource,
    presenter: &'a mut dyn Presenter,
    words: &'a mut dyn WordSource,
    save_dir: PathBuf,
}

impl<'a> Driver<'a> {
    pub fn new(
        input: &'a mut dyn InputSource,
        presenter: &'a mut dyn Presenter,
        words: &'a mut dyn WordSource,
        save_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            input,
            presenter,
            words,
            save_dir: save_dir.into(),
        }
    }

    /// Play games until the player declines another one or input closes.
    pub fn run(&mut self) -> Result<(), HangmanError> {
        match self.games() {
            Ok(()) => {}
            Err(HangmanError::InputClosed) => info!("input closed, leaving"),
            Err(e) => return Err(e),
        }
        self.presenter.farewell()?;
        Ok(())
    }

    fn games(&mut self) -> Result<(), HangmanError> {
        loop {
            self.play_one()?;
            self.presenter.prompt_play_again()?;
            if !validate::read_valid(self.input, self.presenter, validate::play_again)? {
                return Ok(());
            }
        }
    }

    /// One pass from the menu to a finished or saved game. Resource errors
    /// are shown and the menu comes back.
    fn play_one(&mut self) -> Result<(), HangmanError> {
        loop {
            self.presenter.welcome()?;
            self.presenter.prompt_choice()?;
            let choice = validate::read_valid(self.input, self.presenter, validate::menu_choice)?;

            let session = match choice {
                MenuChoice::NewGame => self
                    .words
                    .next_word()
                    .map(|word| Some(GameSession::new(word))),
                MenuChoice::LoadGame => self.load(),
            };
            let session = match session {
                Ok(Some(session)) => session,
                Ok(None) => continue,
                Err(e) => {
                    self.report(e)?;
                    continue;
                }
            };

            if self.play(session)? {
                return Ok(());
            }
        }
    }

    /// `Ok(false)` when saving failed and the menu should come back.
    fn play(&mut self, mut session: GameSession) -> Result<bool, HangmanError> {
        if let SessionEnd::Saved(record) = session.play(self.input, self.presenter)? {
            if let Err(e) = self.save(&record) {
                self.report(e)?;
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// `Ok(None)` when there is nothing to load.
    fn load(&mut self) -> Result<Option<GameSession>, HangmanError> {
        let saves = save::list_saves(&self.save_dir)?;
        if saves.is_empty() {
            self.presenter.no_saves_found()?;
            return Ok(None);
        }

        self.presenter.save_listing(&saves)?;
        let count = saves.len();
        let slot = validate::read_valid(self.input, self.presenter, |raw| {
            validate::slot_index(raw, count)
        })?;

        let path = &saves[slot - 1];
        let record = save::read_save(path)?;
        let session = GameSession::from_save(&record)?;
        info!(path = %path.display(), "game loaded");
        Ok(Some(session))
    }

    fn save(&mut self, record: &SaveRecord) -> Result<(), HangmanError> {
        self.presenter.prompt_file_name()?;
        let name = validate::read_valid(self.input, self.presenter, |raw| {
            validate::file_name(raw).map(str::to_string)
        })?;
        let path = save::write_save(&self.save_dir, &name, record)?;
        self.presenter.save_confirmed(&path)?;
        Ok(())
    }

    /// Show a resource error to the player; anything else is passed back up.
    fn report(&mut self, error: HangmanError) -> Result<(), HangmanError> {
        if !error.is_recoverable() {
            return Err(error);
        }
        warn!(%error, "returning to menu");
        match &error {
            HangmanError::SaveNotFound(path) => self.presenter.file_not_found(path)?,
            other => self.presenter.resource_error(&other.to_string())?,
        }
        Ok(())
    }
}
