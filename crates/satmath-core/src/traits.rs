//! The terminal seam between the quiz logic and the learner.
//!
//! Implemented by [`crate::terminal::StdTerminal`] for real sessions and by
//! [`crate::mock::ScriptedTerminal`] for tests.

use crate::error::QuizError;

/// Line-oriented console used by the session runner and guided solver.
pub trait Terminal {
    /// Print one line of output.
    fn say(&mut self, line: &str) -> Result<(), QuizError>;

    /// Show `prompt` (no trailing newline) and block until the learner
    /// enters a line. The returned line has its line terminator removed.
    ///
    /// Returns [`QuizError::InputClosed`] once input is exhausted.
    fn ask(&mut self, prompt: &str) -> Result<String, QuizError>;
}
