//! Guided step-by-step solving for linear algebra problems.
//!
//! The learner must confirm each elimination step before the final answer
//! is taken. Steps are derived from the problem's structured [`Equation`];
//! forms without a plan (quadratics, or a right-hand side that had to be
//! rounded for display) get a single unguided prompt.

use crate::checker::{parse_number, within, DEFAULT_TOLERANCE};
use crate::error::QuizError;
use crate::model::{Equation, LearnerAnswer, Problem};
use crate::traits::Terminal;

/// How hard the solver insists on a correct step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepPolicy {
    /// Allowed error on a verified intermediate value.
    pub tolerance: f64,
    /// Failed entries allowed per step before giving up on guidance.
    /// `None` reprompts forever.
    pub max_attempts: Option<u32>,
}

impl Default for StepPolicy {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_attempts: None,
        }
    }
}

impl StepPolicy {
    fn exhausted(&self, failures: u32) -> bool {
        self.max_attempts.is_some_and(|max| failures >= max)
    }
}

/// Elimination steps for one equation.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Plan {
    /// `x + b = c`: undo `b`, then read off x.
    OneStep { b: i64, c: i64 },
    /// `ax = b`: divide through.
    Divide { a: i64, b: i64 },
    /// `ax + b = c` with integer `c`: undo `b`, then divide.
    TwoStep { a: i64, b: i64, c: i64 },
}

impl Plan {
    fn for_equation(equation: &Equation) -> Option<Plan> {
        match *equation {
            Equation::OneStep { b, c } => Some(Plan::OneStep { b, c }),
            Equation::Multiplicative { a, b } => Some(Plan::Divide { a, b }),
            // a rounded right-hand side would steer the learner away from x
            Equation::TwoStep { a, b, c } if c.is_finite() && c.fract() == 0.0 => {
                Some(Plan::TwoStep { a, b, c: c as i64 })
            }
            Equation::TwoStep { .. } => None,
            Equation::Arithmetic { .. } | Equation::Quadratic { .. } => None,
        }
    }
}

fn undo_constant(b: i64) -> String {
    if b < 0 {
        format!("Add {} to both sides.", b.unsigned_abs())
    } else {
        format!("Subtract {b} from both sides.")
    }
}

/// Walks the learner through an equation on a borrowed terminal.
pub struct GuidedSolver<'t> {
    term: &'t mut dyn Terminal,
    policy: StepPolicy,
}

impl<'t> GuidedSolver<'t> {
    pub fn new(term: &'t mut dyn Terminal, policy: StepPolicy) -> Self {
        Self { term, policy }
    }

    /// Collect the learner's answer for `problem`, guiding where a plan
    /// exists.
    pub fn solve(&mut self, problem: &Problem) -> Result<LearnerAnswer, QuizError> {
        let Some(plan) = Plan::for_equation(&problem.equation) else {
            return ask_unguided(&mut *self.term);
        };
        tracing::debug!(kind = %problem.kind, ?plan, "guided solve");

        let answer = match plan {
            Plan::OneStep { b, c } => self.one_step(b, c)?,
            Plan::Divide { a, b } => self.divide(a, b)?,
            Plan::TwoStep { a, b, c } => self.two_step(a, b, c)?,
        };

        match answer {
            Some(v) => Ok(LearnerAnswer::Number(v)),
            None => {
                tracing::warn!(kind = %problem.kind, "step attempts exhausted, asking directly");
                self.term.say("Let's move on.")?;
                ask_unguided(&mut *self.term)
            }
        }
    }

    fn one_step(&mut self, b: i64, c: i64) -> Result<Option<f64>, QuizError> {
        let target = (c - b) as f64;
        self.term.say(&format!(
            "Step 1: {} What is the new right-hand side?",
            undo_constant(b)
        ))?;
        let verified = self.ask_step("Answer: ", Some(target), |raw| {
            format!("Not quite. {raw} is incorrect. Try again.")
        })?;
        if verified.is_none() {
            return Ok(None);
        }
        self.term.say("Good. Now what is x?")?;
        self.ask_step("x = ", None, |_| String::new())
    }

    fn divide(&mut self, a: i64, b: i64) -> Result<Option<f64>, QuizError> {
        self.term.say(&format!(
            "Divide both sides by {a}. What is {b} / {a}? (a fraction like 7/3 is fine)"
        ))?;
        let target = b as f64 / a as f64;
        self.ask_step("Answer: ", Some(target), |_| {
            "Incorrect. Try again.".to_string()
        })
    }

    fn two_step(&mut self, a: i64, b: i64, c: i64) -> Result<Option<f64>, QuizError> {
        let intermediate = c - b;
        self.term.say(&format!(
            "Step 1: {} What is the new right-hand side?",
            undo_constant(b)
        ))?;
        let verified = self.ask_step("Answer: ", Some(intermediate as f64), |_| {
            "Not quite. Try again.".to_string()
        })?;
        if verified.is_none() {
            return Ok(None);
        }
        self.term.say(&format!(
            "Good. Step 2: Divide by {a}. What is {intermediate} / {a}? \
             (a fraction like 7/3 is fine)"
        ))?;
        self.ask_step("Answer: ", None, |_| String::new())
    }

    /// Prompt until a number is entered, and if `expected` is set, until it
    /// matches within the step tolerance. `None` means the attempt cap ran
    /// out.
    fn ask_step(
        &mut self,
        prompt: &str,
        expected: Option<f64>,
        wrong: impl Fn(&str) -> String,
    ) -> Result<Option<f64>, QuizError> {
        let mut failures = 0u32;
        loop {
            if self.policy.exhausted(failures) {
                return Ok(None);
            }
            let raw = self.term.ask(prompt)?;
            let Some(value) = parse_number(&raw) else {
                self.term.say("Please enter a number.")?;
                failures += 1;
                continue;
            };
            match expected {
                Some(target) if !within(value, target, self.policy.tolerance) => {
                    self.term.say(&wrong(raw.trim()))?;
                    failures += 1;
                }
                _ => return Ok(Some(value)),
            }
        }
    }
}

/// A single `Your answer:` prompt with no verification.
pub fn ask_unguided(term: &mut dyn Terminal) -> Result<LearnerAnswer, QuizError> {
    let raw = term.ask("Your answer: ")?;
    Ok(LearnerAnswer::from_input(&raw))
}
