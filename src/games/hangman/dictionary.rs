use std::fs;
use std::path::PathBuf;

use rand::rngs::ThreadRng;
use rand::Rng;
use tracing::debug;

use crate::error::HangmanError;
use crate::games::hangman::word::Word;

/// Supplies the secret word for each new game.
pub trait WordSource {
    fn next_word(&mut self) -> Result<Word, HangmanError>;
}

/// Newline-delimited word list on disk; each call picks one line uniformly.
pub struct DictionaryFile<R = ThreadRng> {
    path: PathBuf,
    rng: R,
}

impl DictionaryFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_rng(path, rand::rng())
    }
}

impl<R: Rng> DictionaryFile<R> {
    pub fn with_rng(path: impl Into<PathBuf>, rng: R) -> Self {
        Self {
            path: path.into(),
            rng,
        }
    }
}

impl<R: Rng> WordSource for DictionaryFile<R> {
    fn next_word(&mut self) -> Result<Word, HangmanError> {
        let text = fs::read_to_string(&self.path).map_err(|source| HangmanError::Dictionary {
            path: self.path.clone(),
            source,
        })?;
        let lines: Vec<&str> = text.lines().collect();
        if lines.is_empty() {
            return Err(HangmanError::EmptyDictionary(self.path.clone()));
        }

        let index = self.rng.random_range(0..lines.len());
        let entry = lines[index];
        debug!(index, total = lines.len(), "picked dictionary line");
        Word::parse(entry).ok_or_else(|| HangmanError::InvalidWord {
            line: index + 1,
            entry: entry.to_string(),
        })
    }
}
