//! Session runner.
//!
//! Drives one quiz: generate a problem, collect an answer (auto, guided, or
//! direct), grade it, log it, and finally report the score. The log is
//! owned by the session and handed back to the caller for persistence.

use std::time::Instant;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::checker::{is_correct, DEFAULT_TOLERANCE};
use crate::error::QuizError;
use crate::generator::ProblemGenerator;
use crate::guided::{ask_unguided, GuidedSolver, StepPolicy};
use crate::model::{CanonicalAnswer, LearnerAnswer, Problem, ProblemKind, Verdict};
use crate::statistics::SessionSummary;
use crate::traits::Terminal;

/// Configuration for a quiz session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Problems to ask.
    pub num_questions: usize,
    /// Mix algebra problems in with arithmetic.
    pub include_algebra: bool,
    /// Probability of an algebra problem when algebra is enabled.
    pub algebra_share: f64,
    /// Answer every problem with its canonical answer, without prompting.
    pub auto: bool,
    /// Grading tolerance.
    pub tolerance: f64,
    /// Guided-step verification policy.
    pub step_policy: StepPolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            num_questions: 10,
            include_algebra: false,
            algebra_share: 0.5,
            auto: false,
            tolerance: DEFAULT_TOLERANCE,
            step_policy: StepPolicy::default(),
        }
    }
}

/// One graded problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// 1-based position in the session.
    pub number: usize,
    pub statement: String,
    pub kind: ProblemKind,
    pub learner_answer: LearnerAnswer,
    pub canonical_answer: CanonicalAnswer,
    pub verdict: Verdict,
    /// When the problem was shown.
    pub timestamp: DateTime<Utc>,
    /// Seconds from showing the problem to grading it.
    pub duration_secs: f64,
}

/// Ordered record of one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionLog {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    entries: Vec<LogEntry>,
}

impl SessionLog {
    fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            entries: Vec::new(),
        }
    }

    fn push(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn correct_count(&self) -> usize {
        self.entries.iter().filter(|e| e.verdict.is_correct()).count()
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary::from_log(self)
    }
}

/// Runs quiz sessions against a [`Terminal`].
pub struct SessionRunner<R> {
    generator: ProblemGenerator<R>,
    config: SessionConfig,
}

impl<R: Rng> SessionRunner<R> {
    pub fn new(rng: R, config: SessionConfig) -> Self {
        let generator = ProblemGenerator::new(rng, config.include_algebra, config.algebra_share);
        Self { generator, config }
    }

    /// Ask `num_questions` problems and return the graded log.
    pub fn run(&mut self, term: &mut dyn Terminal) -> Result<SessionLog, QuizError> {
        let total = self.config.num_questions;
        let mut log = SessionLog::new();
        tracing::info!(
            session = %log.id,
            total,
            include_algebra = self.config.include_algebra,
            auto = self.config.auto,
            "session started"
        );

        for number in 1..=total {
            let (problem, canonical) = self.generator.next_problem();
            term.say(&format!("Problem {number}: {}", problem.statement))?;

            let start = Instant::now();
            let timestamp = Utc::now();
            let learner_answer = self.await_answer(term, &problem, &canonical)?;
            let verdict =
                Verdict::from_bool(is_correct(&learner_answer, &canonical, self.config.tolerance));
            let duration_secs = start.elapsed().as_secs_f64();

            tracing::debug!(
                number,
                kind = %problem.kind,
                given = %learner_answer,
                expected = %canonical,
                %verdict,
                "graded"
            );
            term.say(&format!("{verdict}! Correct answer: {canonical}"))?;
            term.say("")?;

            log.push(LogEntry {
                number,
                statement: problem.statement,
                kind: problem.kind,
                learner_answer,
                canonical_answer: canonical,
                verdict,
                timestamp,
                duration_secs,
            });
        }

        let correct = log.correct_count();
        term.say(&format!("You answered {correct}/{total} correctly."))?;
        tracing::info!(session = %log.id, correct, total, "session finished");
        Ok(log)
    }

    fn await_answer(
        &self,
        term: &mut dyn Terminal,
        problem: &Problem,
        canonical: &CanonicalAnswer,
    ) -> Result<LearnerAnswer, QuizError> {
        if self.config.auto {
            let answer = LearnerAnswer::from_canonical(canonical);
            term.say(&format!("Your answer: {answer}"))?;
            return Ok(answer);
        }
        if problem.kind.is_algebra() {
            GuidedSolver::new(term, self.config.step_policy).solve(problem)
        } else {
            ask_unguided(term)
        }
    }

    /// Should the log be persisted? Auto mode always saves; otherwise the
    /// learner is asked and only `y` counts.
    pub fn confirm_save(&self, term: &mut dyn Terminal, target: &str) -> Result<bool, QuizError> {
        if self.config.auto {
            return Ok(true);
        }
        let reply = term.ask(&format!("Save your results to {target}? (y/n): "))?;
        Ok(reply.trim().eq_ignore_ascii_case("y"))
    }
}
