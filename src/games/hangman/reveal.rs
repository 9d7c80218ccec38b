use crate::games::hangman::ledger::Letter;
use crate::games::hangman::word::Word;

pub const HIDDEN_TOKEN: &str = "_";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Hidden,
    Revealed(char),
}

/// Per-position reveal state of the word, one cell per character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealState {
    cells: Vec<Cell>,
}

impl RevealState {
    pub fn hidden(len: usize) -> Self {
        Self {
            cells: vec![Cell::Hidden; len],
        }
    }

    /// Rebuild from display tokens. Returns `None` for any token that is
    /// neither `_` nor a single character.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Option<Self> {
        let cells = tokens
            .iter()
            .map(|token| {
                let token = token.as_ref();
                if token == HIDDEN_TOKEN {
                    return Some(Cell::Hidden);
                }
                let mut chars = token.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(Cell::Revealed(c)),
                    _ => None,
                }
            })
            .collect::<Option<Vec<_>>>()?;
        Some(Self { cells })
    }

    pub fn apply_correct(&mut self, word: &Word, letter: Letter) {
        for (cell, c) in self.cells.iter_mut().zip(word.chars()) {
            if *cell == Cell::Hidden && letter.matches(c) {
                *cell = Cell::Revealed(c);
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.cells.contains(&Cell::Hidden)
    }

    pub fn render(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|cell| match cell {
                Cell::Hidden => HIDDEN_TOKEN.to_string(),
                Cell::Revealed(c) => c.to_string(),
            })
            .collect()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_reveals_every_match_with_original_case() {
        let word = Word::parse("aPPle").unwrap();
        let mut reveal = RevealState::hidden(word.len());

        reveal.apply_correct(&word, Letter::new('p').unwrap());
        assert_eq!(reveal.render(), vec!["_", "P", "P", "_", "_"]);

        reveal.apply_correct(&word, Letter::new('P').unwrap());
        assert_eq!(reveal.render(), vec!["_", "P", "P", "_", "_"]);
        assert!(!reveal.is_complete());
    }

    #[test]
    fn complete_once_nothing_is_hidden() {
        let word = Word::parse("aa").unwrap();
        let mut reveal = RevealState::hidden(word.len());
        reveal.apply_correct(&word, Letter::new('A').unwrap());
        assert!(reveal.is_complete());
    }

    #[test]
    fn tokens_rebuild_cells() {
        let reveal = RevealState::from_tokens(&["c", "_", "_"]).unwrap();
        assert_eq!(
            reveal.cells(),
            &[Cell::Revealed('c'), Cell::Hidden, Cell::Hidden]
        );
        assert!(RevealState::from_tokens(&["ca", "_"]).is_none());
        assert!(RevealState::from_tokens(&[""]).is_none());
    }
}
