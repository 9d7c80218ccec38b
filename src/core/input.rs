/// Line-based input seam. Games read player lines through this trait so the
/// process loop can be driven by stdin or by a script.
use std::io::{self, BufRead, StdinLock};

pub trait InputSource {
    /// Next line without its line terminator, or `None` once input is closed.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

/// Reads lines from any buffered reader.
pub struct LinesSource<R> {
    reader: R,
}

impl<R: BufRead> LinesSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputSource for LinesSource<R> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

/// Player input from the terminal.
pub type StdinSource = LinesSource<StdinLock<'static>>;

impl StdinSource {
    pub fn stdin() -> Self {
        LinesSource::new(io::stdin().lock())
    }
}
