use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::games::hangman::game::SessionState;

/// Crate-level errors
#[derive(Error, Debug)]
pub enum HangmanError {
    #[error("Could not read dictionary {path}: {source}")]
    Dictionary {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Dictionary {0} has no words")]
    EmptyDictionary(PathBuf),
    #[error("Dictionary entry on line {line} is not a word: {entry:?}")]
    InvalidWord { line: usize, entry: String },
    #[error("File {0} not found")]
    SaveNotFound(PathBuf),
    #[error("Malformed save record: {0}")]
    MalformedRecord(String),
    #[error("Could not encode save record: {0}")]
    Encode(#[source] serde_yaml::Error),
    #[error("Could not read {path}: {source}")]
    SaveRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Could not write {path}: {source}")]
    SaveWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid config {path}: {message}")]
    Config { path: PathBuf, message: String },
    #[error("Input closed")]
    InputClosed,
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl HangmanError {
    /// Resource errors are reported to the player and the menu is shown again.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            HangmanError::Dictionary { .. }
                | HangmanError::EmptyDictionary(_)
                | HangmanError::InvalidWord { .. }
                | HangmanError::SaveNotFound(_)
                | HangmanError::MalformedRecord(_)
                | HangmanError::Encode(_)
                | HangmanError::SaveRead { .. }
                | HangmanError::SaveWrite { .. }
        )
    }
}

/// Contract violations inside a session. Input validation keeps these from
/// ever being produced by player input.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Duplicate(#[from] DuplicateGuess),
    #[error("Session is no longer playing ({0:?})")]
    NotPlaying(SessionState),
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Letter '{0}' already guessed")]
pub struct DuplicateGuess(pub char);
