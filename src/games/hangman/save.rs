//! Save files: the [`SaveRecord`] snapshot, its mapping to and from a
//! [`GameSession`], and the `.yaml` files it lives in.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::HangmanError;
use crate::games::hangman::game::{AttemptBudget, GameSession};
use crate::games::hangman::ledger::{GuessLedger, Letter, Outcome};
use crate::games::hangman::reveal::RevealState;
use crate::games::hangman::word::Word;

pub const SAVE_EXTENSION: &str = "yaml";

/// Persisted snapshot of an unfinished game. Guess outcomes are not stored;
/// they follow from the word and are recomputed on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRecord {
    pub word: String,
    pub length: usize,
    pub guesses_left: u32,
    pub result: Vec<String>,
    pub guesses: Vec<String>,
}

pub fn encode(session: &GameSession) -> SaveRecord {
    SaveRecord {
        word: session.word().to_string(),
        length: session.word().len(),
        guesses_left: session.attempts_left(),
        result: session.reveal().render(),
        guesses: session.ledger().letters().map(|l| l.to_string()).collect(),
    }
}

pub fn decode(record: &SaveRecord) -> Result<GameSession, HangmanError> {
    let word = Word::parse(&record.word)
        .ok_or_else(|| malformed(format!("`{}` is not a word", record.word)))?;

    if record.length != word.len() {
        return Err(malformed(format!(
            "length {} does not match word of {} letters",
            record.length,
            word.len()
        )));
    }
    if record.result.len() != word.len() {
        return Err(malformed(format!(
            "result has {} cells for a word of {} letters",
            record.result.len(),
            word.len()
        )));
    }
    let reveal = RevealState::from_tokens(record.result.as_slice())
        .ok_or_else(|| malformed("result cells must be single characters".to_string()))?;
    if reveal.is_complete() {
        return Err(malformed("game is already won".to_string()));
    }
    if record.guesses_left == 0 {
        return Err(malformed("game is already lost".to_string()));
    }

    let mut ledger = GuessLedger::new();
    for token in &record.guesses {
        let letter = Letter::from_token(token)
            .ok_or_else(|| malformed(format!("guess {token:?} is not a single letter")))?;
        ledger
            .record(letter, Outcome::of(&word, letter))
            .map_err(|e| malformed(e.to_string()))?;
    }

    Ok(GameSession::restore(
        word,
        ledger,
        reveal,
        AttemptBudget::new(record.guesses_left),
    ))
}

fn malformed(message: String) -> HangmanError {
    HangmanError::MalformedRecord(message)
}

/// File name for a save: whatever the player typed, cut at the first `.`,
/// with the save extension appended.
pub fn save_file_name(input: &str) -> String {
    let stem = input.split('.').next().unwrap_or(input);
    format!("{stem}.{SAVE_EXTENSION}")
}

/// Write `record` into `dir`, creating the directory when needed.
pub fn write_save(dir: &Path, name: &str, record: &SaveRecord) -> Result<PathBuf, HangmanError> {
    let path = dir.join(save_file_name(name));
    let yaml = serde_yaml::to_string(record).map_err(HangmanError::Encode)?;
    fs::create_dir_all(dir)
        .and_then(|()| fs::write(&path, yaml))
        .map_err(|source| HangmanError::SaveWrite {
            path: path.clone(),
            source,
        })?;
    info!(path = %path.display(), "game saved");
    Ok(path)
}

pub fn read_save(path: &Path) -> Result<SaveRecord, HangmanError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(HangmanError::SaveNotFound(path.to_path_buf()))
        }
        Err(e) if e.kind() == io::ErrorKind::InvalidData => {
            return Err(malformed(format!("{} is not text: {e}", path.display())))
        }
        Err(source) => {
            return Err(HangmanError::SaveRead {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    serde_yaml::from_str(&text).map_err(|e| malformed(e.to_string()))
}

/// Save files in `dir`, sorted by name. A missing directory has no saves.
pub fn list_saves(dir: &Path) -> Result<Vec<PathBuf>, HangmanError> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => return Err(unreadable_dir(dir, source)),
    };

    let mut saves = Vec::new();
    for entry in entries {
        let path = entry.map_err(|source| unreadable_dir(dir, source))?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == SAVE_EXTENSION) {
            saves.push(path);
        }
    }
    saves.sort();
    Ok(saves)
}

fn unreadable_dir(dir: &Path, source: io::Error) -> HangmanError {
    HangmanError::SaveRead {
        path: dir.to_path_buf(),
        source,
    }
}
