//! Procedural problem generation.
//!
//! Every template picks the solution first and builds the equation around
//! it, so canonical answers are exact by construction.

use rand::Rng;

use crate::model::{CanonicalAnswer, Equation, Operator, Problem, ProblemKind};

/// Broad problem category chosen per question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Arithmetic,
    Algebra,
}

/// Produces problems from an injected random source.
pub struct ProblemGenerator<R> {
    rng: R,
    include_algebra: bool,
    algebra_share: f64,
}

impl<R: Rng> ProblemGenerator<R> {
    /// `algebra_share` is the probability of an algebra problem when
    /// algebra is enabled; it is clamped into `[0, 1]` (NaN means 0.5).
    pub fn new(rng: R, include_algebra: bool, algebra_share: f64) -> Self {
        let algebra_share = if algebra_share.is_nan() {
            0.5
        } else {
            algebra_share.clamp(0.0, 1.0)
        };
        Self {
            rng,
            include_algebra,
            algebra_share,
        }
    }

    /// Pick a category for the next problem. Arithmetic only unless algebra
    /// is enabled, and then independently per problem.
    pub fn pick_category(&mut self) -> Category {
        if self.include_algebra && self.rng.random_bool(self.algebra_share) {
            Category::Algebra
        } else {
            Category::Arithmetic
        }
    }

    /// Generate the next problem using the category selection policy.
    pub fn next_problem(&mut self) -> (Problem, CanonicalAnswer) {
        let category = self.pick_category();
        self.generate(category)
    }

    pub fn generate(&mut self, category: Category) -> (Problem, CanonicalAnswer) {
        match category {
            Category::Arithmetic => self.arithmetic(),
            Category::Algebra => {
                let idx = self.rng.random_range(0..ProblemKind::ALGEBRA.len());
                self.algebra(ProblemKind::ALGEBRA[idx])
            }
        }
    }

    /// Generate a problem of a specific kind.
    pub fn generate_kind(&mut self, kind: ProblemKind) -> (Problem, CanonicalAnswer) {
        match kind {
            ProblemKind::Arithmetic => self.arithmetic(),
            kind => self.algebra(kind),
        }
    }

    fn arithmetic(&mut self) -> (Problem, CanonicalAnswer) {
        let mut lhs = self.rng.random_range(1..=20i64);
        let rhs = self.rng.random_range(1..=20i64);
        let op = Operator::ALL[self.rng.random_range(0..Operator::ALL.len())];
        if op == Operator::Div {
            // exact integer quotient
            lhs *= rhs;
        }
        let answer = round_to(op.apply(lhs, rhs), 2);
        let problem = Problem::new(
            ProblemKind::Arithmetic,
            Equation::Arithmetic { lhs, op, rhs },
        );
        (problem, CanonicalAnswer::Scalar(answer))
    }

    fn algebra(&mut self, kind: ProblemKind) -> (Problem, CanonicalAnswer) {
        match kind {
            ProblemKind::OneStep => {
                let x = self.rng.random_range(-10..=20i64);
                let b = self.rng.random_range(-10..=20i64);
                let equation = Equation::OneStep { b, c: x + b };
                (Problem::new(kind, equation), CanonicalAnswer::Scalar(x as f64))
            }
            ProblemKind::Multiplicative => {
                let x = self.rng.random_range(-10..=20i64);
                let a = self.rng.random_range(1..=12i64);
                let equation = Equation::Multiplicative { a, b: a * x };
                (Problem::new(kind, equation), CanonicalAnswer::Scalar(x as f64))
            }
            ProblemKind::TwoStep => {
                let x = self.rng.random_range(-10..=20i64);
                let a = self.rng.random_range(1..=12i64);
                let b = self.rng.random_range(-10..=20i64);
                let c = (a * x + b) as f64;
                let equation = Equation::TwoStep { a, b, c };
                (Problem::new(kind, equation), CanonicalAnswer::Scalar(x as f64))
            }
            ProblemKind::Fractional => {
                let numerator = self.rng.random_range(-10..=20i64);
                let denominator = self.rng.random_range(2..=12i64);
                let x = numerator as f64 / denominator as f64;
                let a = self.rng.random_range(1..=12i64);
                let b = self.rng.random_range(-10..=20i64);
                let exact = a as f64 * x + b as f64;
                let c = if (exact - exact.round()).abs() > 1e-9 {
                    round_to(exact, 4)
                } else {
                    exact.round()
                };
                let equation = Equation::TwoStep { a, b, c };
                (Problem::new(kind, equation), CanonicalAnswer::Scalar(x))
            }
            ProblemKind::Quadratic => {
                let r1 = self.rng.random_range(-6..=6i64);
                let r2 = self.rng.random_range(-6..=6i64);
                let equation = Equation::Quadratic {
                    s: -(r1 + r2),
                    p: r1 * r2,
                };
                (
                    Problem::new(kind, equation),
                    CanonicalAnswer::Pair(r1 as f64, r2 as f64),
                )
            }
            ProblemKind::Arithmetic => self.arithmetic(),
        }
    }
}

fn round_to(v: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (v * factor).round() / factor
}
