//! Blocking stdin/stdout terminal.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::error::QuizError;
use crate::traits::Terminal;

/// A [`Terminal`] over any buffered reader and writer.
pub struct StdTerminal<R, W> {
    input: R,
    output: W,
}

impl StdTerminal<StdinLock<'static>, Stdout> {
    /// Terminal bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StdTerminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the terminal and hand back the writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Terminal for StdTerminal<R, W> {
    fn say(&mut self, line: &str) -> Result<(), QuizError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<String, QuizError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(QuizError::InputClosed);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }
}
