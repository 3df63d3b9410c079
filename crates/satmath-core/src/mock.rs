//! Scripted terminal for testing.

use std::collections::VecDeque;

use crate::error::QuizError;
use crate::traits::Terminal;

/// A terminal that replays canned learner input and records everything
/// shown, so sessions can be driven without a real console.
#[derive(Debug, Default)]
pub struct ScriptedTerminal {
    /// Lines the learner will "type", in order.
    inputs: VecDeque<String>,
    /// Every `say` line and every prompt, in order.
    transcript: Vec<String>,
    /// Number of prompts answered so far.
    asked: usize,
}

impl ScriptedTerminal {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
            asked: 0,
        }
    }

    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// True if any transcript line contains `needle`.
    pub fn saw(&self, needle: &str) -> bool {
        self.transcript.iter().any(|l| l.contains(needle))
    }

    /// How many prompts were answered.
    pub fn asked(&self) -> usize {
        self.asked
    }

    /// Input lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

impl Terminal for ScriptedTerminal {
    fn say(&mut self, line: &str) -> Result<(), QuizError> {
        self.transcript.push(line.to_string());
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<String, QuizError> {
        self.transcript.push(prompt.to_string());
        let line = self.inputs.pop_front().ok_or(QuizError::InputClosed)?;
        self.asked += 1;
        Ok(line)
    }
}
