//! Optional game configuration, read from `hangman.toml` in the working
//! directory.
//!
//! ```toml
//! # Word list, one word per line
//! dictionary = "5desk.txt"
//!
//! # Where save files are written and listed
//! save_dir = "."
//!
//! # Colored output
//! color = true
//!
//! # Log filter (RUST_LOG wins when set) and optional log file
//! log_level = "warn"
//! log_file = "hangman.log"
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::HangmanError;

pub const CONFIG_FILE: &str = "hangman.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Newline-delimited word list
    pub dictionary: PathBuf,
    /// Directory holding `.yaml` save files
    pub save_dir: PathBuf,
    pub color: bool,
    pub log_level: String,
    /// Logs go to stderr when unset
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: PathBuf::from("5desk.txt"),
            save_dir: PathBuf::from("."),
            color: true,
            log_level: "warn".to_string(),
            log_file: None,
        }
    }
}

impl Config {
    /// Load `hangman.toml` from the working directory.
    pub fn load() -> Result<Self, HangmanError> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// A missing file means defaults; a file that does not parse is an error.
    pub fn load_from(path: &Path) -> Result<Self, HangmanError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };
        toml::from_str(&content).map_err(|e| HangmanError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
