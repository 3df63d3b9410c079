//! Quiz error types.
//!
//! Only terminal failures surface here. Malformed learner input is never an
//! error: the guided solver reprompts and the checker grades it Incorrect.

use thiserror::Error;

/// Errors that can interrupt a quiz session.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Input reached end-of-file while a prompt was waiting for a line.
    #[error("input closed while waiting for an answer")]
    InputClosed,

    /// Reading from or writing to the terminal failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl QuizError {
    /// Returns `true` if the learner simply stopped typing (EOF / closed pipe).
    pub fn is_input_closed(&self) -> bool {
        matches!(self, QuizError::InputClosed)
    }
}
