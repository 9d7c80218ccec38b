/// Hangman: guess the word one letter at a time, with save and resume.
pub mod dictionary;
pub mod driver;
pub mod game;
pub mod ledger;
pub mod renderer;
pub mod reveal;
pub mod save;
#[cfg(test)]
mod tests_props;
pub mod validate;
pub mod word;

pub use dictionary::{DictionaryFile, WordSource};
pub use driver::Driver;
pub use game::{GameSession, SessionEnd, SessionState, Verdict};
pub use renderer::ConsolePresenter;
pub use save::SaveRecord;
