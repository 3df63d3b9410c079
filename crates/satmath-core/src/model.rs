//! Core data model types for satmath.
//!
//! A [`Problem`] carries its structured [`Equation`] next to the rendered
//! statement, so nothing downstream ever has to re-parse text to recover
//! coefficients.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::checker::parse_number;

/// Arithmetic operator used by arithmetic problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Every operator, in the order the generator draws from.
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    /// Evaluate `lhs <op> rhs`.
    pub fn apply(self, lhs: i64, rhs: i64) -> f64 {
        let (lhs, rhs) = (lhs as f64, rhs as f64);
        match self {
            Operator::Add => lhs + rhs,
            Operator::Sub => lhs - rhs,
            Operator::Mul => lhs * rhs,
            Operator::Div => lhs / rhs,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Which template a problem was generated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProblemKind {
    Arithmetic,
    OneStep,
    Multiplicative,
    TwoStep,
    Fractional,
    Quadratic,
}

impl ProblemKind {
    /// The five algebra subtypes, drawn uniformly.
    pub const ALGEBRA: [ProblemKind; 5] = [
        ProblemKind::OneStep,
        ProblemKind::Multiplicative,
        ProblemKind::TwoStep,
        ProblemKind::Fractional,
        ProblemKind::Quadratic,
    ];

    pub fn is_algebra(self) -> bool {
        self != ProblemKind::Arithmetic
    }
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProblemKind::Arithmetic => write!(f, "arithmetic"),
            ProblemKind::OneStep => write!(f, "one-step"),
            ProblemKind::Multiplicative => write!(f, "multiplicative"),
            ProblemKind::TwoStep => write!(f, "two-step"),
            ProblemKind::Fractional => write!(f, "fractional"),
            ProblemKind::Quadratic => write!(f, "quadratic"),
        }
    }
}

/// Structured form of a generated problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "form", rename_all = "snake_case")]
pub enum Equation {
    /// `lhs <op> rhs`
    Arithmetic { lhs: i64, op: Operator, rhs: i64 },
    /// `x + b = c`
    OneStep { b: i64, c: i64 },
    /// `ax = b`
    Multiplicative { a: i64, b: i64 },
    /// `ax + b = c`. `c` holds exactly the value shown to the learner.
    TwoStep { a: i64, b: i64, c: f64 },
    /// `x^2 + sx + p = 0`
    Quadratic { s: i64, p: i64 },
}

/// `+ 4` / `- 4`.
fn signed_term(v: i64) -> String {
    if v < 0 {
        format!("- {}", v.unsigned_abs())
    } else {
        format!("+ {v}")
    }
}

/// Right-hand sides are shown as integers when whole, otherwise to 4 places.
fn format_rhs(c: f64) -> String {
    if (c - c.round()).abs() > 1e-9 {
        format!("{c:.4}")
    } else {
        format!("{}", c.round() as i64)
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Equation::Arithmetic { lhs, op, rhs } => write!(f, "{lhs} {op} {rhs}"),
            Equation::OneStep { b, c } => write!(f, "x {} = {c}", signed_term(b)),
            Equation::Multiplicative { a, b } => write!(f, "{a}x = {b}"),
            Equation::TwoStep { a, b, c } => {
                write!(f, "{a}x {} = {}", signed_term(b), format_rhs(c))
            }
            Equation::Quadratic { s, p } => {
                write!(f, "x^2")?;
                match s {
                    0 => {}
                    1 => write!(f, " + x")?,
                    -1 => write!(f, " - x")?,
                    s => write!(f, " {}x", signed_term(s))?,
                }
                if p != 0 {
                    write!(f, " {}", signed_term(p))?;
                }
                write!(f, " = 0")
            }
        }
    }
}

/// A generated problem. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    /// Text shown to the learner.
    pub statement: String,
    pub kind: ProblemKind,
    pub equation: Equation,
}

impl Problem {
    pub fn new(kind: ProblemKind, equation: Equation) -> Self {
        let statement = if kind.is_algebra() {
            format!("Solve for x: {equation}")
        } else {
            equation.to_string()
        };
        Self {
            statement,
            kind,
            equation,
        }
    }
}

/// The mathematically correct value(s) for a problem.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CanonicalAnswer {
    Scalar(f64),
    /// Unordered pair of roots.
    Pair(f64, f64),
}

impl CanonicalAnswer {
    /// Values in ascending order.
    pub fn sorted_values(&self) -> Vec<f64> {
        match *self {
            CanonicalAnswer::Scalar(v) => vec![v],
            CanonicalAnswer::Pair(a, b) => {
                let mut v = vec![a, b];
                v.sort_by(f64::total_cmp);
                v
            }
        }
    }
}

impl fmt::Display for CanonicalAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CanonicalAnswer::Scalar(v) => write!(f, "{}", format_number(v)),
            CanonicalAnswer::Pair(a, b) => {
                write!(f, "{}, {}", format_number(a), format_number(b))
            }
        }
    }
}

/// What the learner typed, parsed as far as it goes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LearnerAnswer {
    Number(f64),
    Numbers(Vec<f64>),
    /// Unparseable input, kept verbatim for the log.
    Text(String),
}

impl LearnerAnswer {
    /// Interpret a raw line from an unguided prompt.
    ///
    /// A single number becomes [`LearnerAnswer::Number`]; anything else is
    /// kept as text so the checker can still split comma-separated roots.
    pub fn from_input(raw: &str) -> Self {
        match parse_number(raw) {
            Some(v) => LearnerAnswer::Number(v),
            None => LearnerAnswer::Text(raw.to_string()),
        }
    }

    /// The answer a perfect learner would give, used by auto mode.
    pub fn from_canonical(answer: &CanonicalAnswer) -> Self {
        match *answer {
            CanonicalAnswer::Scalar(v) => LearnerAnswer::Number(v),
            CanonicalAnswer::Pair(a, b) => LearnerAnswer::Numbers(vec![a, b]),
        }
    }
}

impl From<&str> for LearnerAnswer {
    fn from(s: &str) -> Self {
        LearnerAnswer::Text(s.to_string())
    }
}

impl fmt::Display for LearnerAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LearnerAnswer::Number(v) => write!(f, "{}", format_number(*v)),
            LearnerAnswer::Numbers(vs) => {
                let parts: Vec<String> = vs.iter().map(|v| format_number(*v)).collect();
                write!(f, "{}", parts.join(", "))
            }
            LearnerAnswer::Text(s) => write!(f, "{s}"),
        }
    }
}

/// Grading outcome for one problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Correct,
    Incorrect,
}

impl Verdict {
    pub fn from_bool(correct: bool) -> Self {
        if correct {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        }
    }

    pub fn is_correct(self) -> bool {
        self == Verdict::Correct
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Correct => write!(f, "Correct"),
            Verdict::Incorrect => write!(f, "Incorrect"),
        }
    }
}

/// Whole numbers print without a fractional part; everything else is
/// trimmed to at most six decimals.
pub fn format_number(v: f64) -> String {
    if v.is_finite() && (v - v.round()).abs() < 1e-9 {
        return format!("{}", v.round() as i64);
    }
    let s = format!("{v:.6}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_apply() {
        assert_eq!(Operator::Add.apply(3, 4), 7.0);
        assert_eq!(Operator::Sub.apply(3, 4), -1.0);
        assert_eq!(Operator::Mul.apply(3, 4), 12.0);
        assert_eq!(Operator::Div.apply(12, 4), 3.0);
    }

    #[test]
    fn kind_display() {
        assert_eq!(ProblemKind::TwoStep.to_string(), "two-step");
        assert_eq!(ProblemKind::Multiplicative.to_string(), "multiplicative");
        assert!(!ProblemKind::Arithmetic.is_algebra());
        assert!(ProblemKind::ALGEBRA.iter().all(|k| k.is_algebra()));
    }

    #[test]
    fn render_linear_forms() {
        let p = Problem::new(ProblemKind::OneStep, Equation::OneStep { b: -4, c: 3 });
        assert_eq!(p.statement, "Solve for x: x - 4 = 3");

        let p = Problem::new(
            ProblemKind::Multiplicative,
            Equation::Multiplicative { a: 6, b: -12 },
        );
        assert_eq!(p.statement, "Solve for x: 6x = -12");

        let p = Problem::new(ProblemKind::TwoStep, Equation::TwoStep { a: 3, b: 5, c: 11.0 });
        assert_eq!(p.statement, "Solve for x: 3x + 5 = 11");

        let p = Problem::new(
            ProblemKind::Fractional,
            Equation::TwoStep { a: 2, b: 1, c: 5.6667 },
        );
        assert_eq!(p.statement, "Solve for x: 2x + 1 = 5.6667");
    }

    #[test]
    fn render_quadratic_terms() {
        let eq = Equation::Quadratic { s: -5, p: 6 };
        assert_eq!(eq.to_string(), "x^2 - 5x + 6 = 0");
        let eq = Equation::Quadratic { s: 1, p: 0 };
        assert_eq!(eq.to_string(), "x^2 + x = 0");
        let eq = Equation::Quadratic { s: 0, p: -9 };
        assert_eq!(eq.to_string(), "x^2 - 9 = 0");
        let eq = Equation::Quadratic { s: 0, p: 0 };
        assert_eq!(eq.to_string(), "x^2 = 0");
    }

    #[test]
    fn arithmetic_statement_has_no_prefix() {
        let p = Problem::new(
            ProblemKind::Arithmetic,
            Equation::Arithmetic { lhs: 36, op: Operator::Div, rhs: 4 },
        );
        assert_eq!(p.statement, "36 / 4");
    }

    #[test]
    fn number_formatting() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(7.0 / 3.0), "2.333333");
        assert_eq!(CanonicalAnswer::Pair(-2.0, 3.0).to_string(), "-2, 3");
    }

    #[test]
    fn answers_serialize_untagged() {
        let pair = serde_json::to_string(&CanonicalAnswer::Pair(1.0, -2.0)).unwrap();
        assert_eq!(pair, "[1.0,-2.0]");
        let back: LearnerAnswer = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(back, LearnerAnswer::Text("abc".into()));
        let back: LearnerAnswer = serde_json::from_str("4.5").unwrap();
        assert_eq!(back, LearnerAnswer::Number(4.5));
    }

    #[test]
    fn learner_answer_from_input() {
        assert_eq!(LearnerAnswer::from_input(" 4 "), LearnerAnswer::Number(4.0));
        assert_eq!(
            LearnerAnswer::from_input("2, 3"),
            LearnerAnswer::Text("2, 3".into())
        );
        assert_eq!(
            LearnerAnswer::from_canonical(&CanonicalAnswer::Pair(1.0, 2.0)),
            LearnerAnswer::Numbers(vec![1.0, 2.0])
        );
    }
}
