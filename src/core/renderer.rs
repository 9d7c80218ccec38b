/// Display seam for the game. One method per display event; implementations
/// own all wording and styling, the game never formats text itself.
use std::io;
use std::path::{Path, PathBuf};

use crate::games::hangman::game::Verdict;
use crate::games::hangman::ledger::{GuessLedger, Outcome};
use crate::games::hangman::validate::Rejection;
use crate::games::hangman::word::Word;

pub trait Presenter {
    /// Greeting and the new/load menu
    fn welcome(&mut self) -> io::Result<()>;
    fn prompt_choice(&mut self) -> io::Result<()>;
    fn game_started(&mut self, resumed: bool) -> io::Result<()>;
    fn word_length(&mut self, length: usize) -> io::Result<()>;
    fn guesses_left(&mut self, remaining: u32) -> io::Result<()>;
    fn masked_word(&mut self, tokens: &[String]) -> io::Result<()>;
    fn guess_history(&mut self, ledger: &GuessLedger) -> io::Result<()>;
    fn prompt_guess(&mut self) -> io::Result<()>;
    fn guess_feedback(&mut self, outcome: Outcome) -> io::Result<()>;
    /// End of a finished game. The word is only shown on a loss.
    fn game_result(&mut self, verdict: Verdict, word: &Word) -> io::Result<()>;
    fn invalid_input(&mut self, rejection: Rejection) -> io::Result<()>;
    fn prompt_file_name(&mut self) -> io::Result<()>;
    fn save_confirmed(&mut self, path: &Path) -> io::Result<()>;
    /// Numbered (from 1) list of save files to pick from
    fn save_listing(&mut self, saves: &[PathBuf]) -> io::Result<()>;
    fn no_saves_found(&mut self) -> io::Result<()>;
    fn file_not_found(&mut self, path: &Path) -> io::Result<()>;
    fn resource_error(&mut self, message: &str) -> io::Result<()>;
    fn prompt_play_again(&mut self) -> io::Result<()>;
    fn farewell(&mut self) -> io::Result<()>;
}
