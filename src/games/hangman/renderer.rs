/// Hangman console presenter - plain prompts and colored feedback
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::core::renderer::Presenter;
use crate::core::terminal::{TerminalColor, TerminalContext};
use crate::games::hangman::game::Verdict;
use crate::games::hangman::ledger::{GuessLedger, Outcome};
use crate::games::hangman::validate::{Rejection, SAVE_TOKEN};
use crate::games::hangman::word::Word;

pub struct ConsolePresenter<W: Write> {
    ctx: TerminalContext<W>,
}

impl<W: Write> ConsolePresenter<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            ctx: TerminalContext::new(out, color),
        }
    }

    pub fn into_inner(self) -> W {
        self.ctx.into_inner()
    }

    /// Prompts end with a flush so they show up before input is read.
    fn prompt(&mut self, text: &str) -> io::Result<()> {
        self.ctx.print_line(text)?;
        self.ctx.flush()
    }
}

fn outcome_color(outcome: Outcome) -> TerminalColor {
    match outcome {
        Outcome::Correct => TerminalColor::Green,
        Outcome::Incorrect => TerminalColor::Red,
    }
}

impl<W: Write> Presenter for ConsolePresenter<W> {
    fn welcome(&mut self) -> io::Result<()> {
        self.ctx.print_line(&format!("{:^100}", "Welcome to Hangman!"))?;
        self.ctx.empty_line()?;
        self.ctx.print_line("Please choose one of the options below (1 or 2)")?;
        self.ctx.empty_line()?;
        self.ctx.print_colored_line("1) Start new game", TerminalColor::Green)?;
        self.ctx.print_colored_line("2) Load previous game", TerminalColor::Green)
    }

    fn prompt_choice(&mut self) -> io::Result<()> {
        self.prompt("Enter your choice")
    }

    fn game_started(&mut self, resumed: bool) -> io::Result<()> {
        let text = if resumed { "Loaded game started" } else { "New game started" };
        self.ctx.print_colored_line(text, TerminalColor::Green)
    }

    fn word_length(&mut self, length: usize) -> io::Result<()> {
        self.ctx
            .print_colored_line(&format!("length of word: {length}"), TerminalColor::LightBlue)
    }

    fn guesses_left(&mut self, remaining: u32) -> io::Result<()> {
        self.ctx
            .print_colored_line(&format!("Guesses left: {remaining}"), TerminalColor::LightBlue)?;
        self.ctx.empty_line()
    }

    fn masked_word(&mut self, tokens: &[String]) -> io::Result<()> {
        self.ctx.print_line(&tokens.join(" "))?;
        self.ctx.empty_line()
    }

    fn guess_history(&mut self, ledger: &GuessLedger) -> io::Result<()> {
        for (i, guess) in ledger.iter().enumerate() {
            if i > 0 {
                self.ctx.print(", ")?;
            }
            self.ctx
                .print_colored(&guess.letter.to_string(), outcome_color(guess.outcome))?;
        }
        if !ledger.is_empty() {
            self.ctx.empty_line()?;
        }
        Ok(())
    }

    fn prompt_guess(&mut self) -> io::Result<()> {
        self.ctx.empty_line()?;
        self.prompt(&format!(
            "Type a letter to check if it exists in the word or type {SAVE_TOKEN} to save game"
        ))
    }

    fn guess_feedback(&mut self, outcome: Outcome) -> io::Result<()> {
        let text = match outcome {
            Outcome::Correct => "Correct guess!",
            Outcome::Incorrect => "Incorrect guess",
        };
        self.ctx.print_colored_line(text, outcome_color(outcome))
    }

    fn game_result(&mut self, verdict: Verdict, word: &Word) -> io::Result<()> {
        match verdict {
            Verdict::Won => self
                .ctx
                .print_colored_line("Good job, you guessed the word", TerminalColor::Green),
            Verdict::Lost => self.ctx.print_colored_line(
                &format!("No more guesses left, the word was {word}"),
                TerminalColor::Red,
            ),
        }
    }

    fn invalid_input(&mut self, rejection: Rejection) -> io::Result<()> {
        let text = match rejection {
            Rejection::AlreadyGuessed => "letter already guessed, please enter another letter",
            Rejection::EmptyOrInvalidStart => "Invalid file name please enter again",
            Rejection::NotYesOrNo => "Please answer yes or no",
            Rejection::NotOneOrTwo | Rejection::NotSingleLetter | Rejection::OutOfRange => {
                "Invalid input please try again"
            }
        };
        self.ctx.print_colored_line(text, TerminalColor::Red)?;
        self.ctx.flush()
    }

    fn prompt_file_name(&mut self) -> io::Result<()> {
        self.prompt("Enter file name:")
    }

    fn save_confirmed(&mut self, path: &Path) -> io::Result<()> {
        self.ctx.print_line(&format!("File {} saved", path.display()))
    }

    fn save_listing(&mut self, saves: &[PathBuf]) -> io::Result<()> {
        for (i, path) in saves.iter().enumerate() {
            let name = path.file_name().unwrap_or(path.as_os_str());
            self.ctx
                .print_line(&format!("{}. {}", i + 1, name.to_string_lossy()))?;
        }
        self.prompt("Enter the number of the game to load")
    }

    fn no_saves_found(&mut self) -> io::Result<()> {
        self.ctx.empty_line()?;
        self.ctx.print_colored_line("No saved games found", TerminalColor::Red)?;
        self.ctx.empty_line()
    }

    fn file_not_found(&mut self, path: &Path) -> io::Result<()> {
        self.ctx.print_colored_line(
            &format!("Error, file {} not found", path.display()),
            TerminalColor::Red,
        )
    }

    fn resource_error(&mut self, message: &str) -> io::Result<()> {
        self.ctx
            .print_colored_line(&format!("Error, {message}"), TerminalColor::Red)
    }

    fn prompt_play_again(&mut self) -> io::Result<()> {
        self.prompt("Do you wish to play again ? (yes or no)")
    }

    fn farewell(&mut self) -> io::Result<()> {
        self.ctx.print_line("Thanks for playing")?;
        self.ctx.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::hangman::ledger::Letter;

    fn render(f: impl FnOnce(&mut ConsolePresenter<Vec<u8>>) -> io::Result<()>) -> String {
        let mut presenter = ConsolePresenter::new(Vec::new(), false);
        f(&mut presenter).unwrap();
        String::from_utf8(presenter.into_inner()).unwrap()
    }

    #[test]
    fn loss_reveals_the_word_but_a_win_does_not() {
        let word = Word::parse("cat").unwrap();
        let lost = render(|p| p.game_result(Verdict::Lost, &word));
        assert_eq!(lost, "No more guesses left, the word was cat\n");

        let won = render(|p| p.game_result(Verdict::Won, &word));
        assert!(!won.contains("cat"));
    }

    #[test]
    fn history_lists_letters_in_order() {
        let mut ledger = GuessLedger::new();
        ledger.record(Letter::new('c').unwrap(), Outcome::Correct).unwrap();
        ledger.record(Letter::new('z').unwrap(), Outcome::Incorrect).unwrap();

        assert_eq!(render(|p| p.guess_history(&ledger)), "c, z\n");
        assert_eq!(render(|p| p.guess_history(&GuessLedger::new())), "");
    }

    #[test]
    fn mask_is_space_separated() {
        let tokens = vec!["c".to_string(), "_".to_string(), "_".to_string()];
        assert_eq!(render(|p| p.masked_word(&tokens)), "c _ _\n\n");
    }

    #[test]
    fn listing_is_numbered_from_one() {
        let saves = vec![PathBuf::from("./a.yaml"), PathBuf::from("./b.yaml")];
        let out = render(|p| p.save_listing(&saves));
        assert!(out.starts_with("1. a.yaml\n2. b.yaml\n"));
    }

    #[test]
    fn repeated_guess_has_its_own_message() {
        let out = render(|p| p.invalid_input(Rejection::AlreadyGuessed));
        assert_eq!(out, "letter already guessed, please enter another letter\n");
    }
}
