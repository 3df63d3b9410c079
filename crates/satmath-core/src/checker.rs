//! Answer equivalence checking.
//!
//! Grading is a pure function of (learner answer, canonical answer,
//! tolerance). Unparseable input is graded `false`; nothing here can fail.

use crate::model::{CanonicalAnswer, LearnerAnswer};

/// Default absolute tolerance for a Correct verdict.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Parse a single learner-typed number.
///
/// Accepts finite values in anything `f64::from_str` accepts (after
/// trimming) plus a simple fraction `p/q`, so `7/3` can be entered exactly.
pub fn parse_number(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    let value = match s.parse::<f64>() {
        Ok(v) => v,
        Err(_) => {
            let (num, den) = s.split_once('/')?;
            let num = num.trim().parse::<f64>().ok()?;
            let den = den.trim().parse::<f64>().ok()?;
            if den == 0.0 {
                return None;
            }
            num / den
        }
    };
    value.is_finite().then_some(value)
}

/// Parse a comma-separated list of numbers. Blank parts are skipped;
/// any other unparseable part fails the whole list.
pub fn parse_number_list(raw: &str) -> Option<Vec<f64>> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(parse_number)
        .collect()
}

/// Is `learner` equal to `canonical` within `tolerance`?
///
/// Multi-root answers are order-independent: both sides are sorted before
/// the element-wise comparison.
pub fn is_correct(learner: &LearnerAnswer, canonical: &CanonicalAnswer, tolerance: f64) -> bool {
    match canonical {
        CanonicalAnswer::Pair(..) => {
            let mut given = match learner {
                LearnerAnswer::Text(s) => match parse_number_list(s) {
                    Some(v) => v,
                    None => return false,
                },
                LearnerAnswer::Numbers(v) => v.clone(),
                LearnerAnswer::Number(v) => vec![*v],
            };
            let expected = canonical.sorted_values();
            if given.len() != expected.len() {
                return false;
            }
            given.sort_by(f64::total_cmp);
            given
                .iter()
                .zip(&expected)
                .all(|(g, e)| within(*g, *e, tolerance))
        }
        CanonicalAnswer::Scalar(expected) => {
            let given = match learner {
                LearnerAnswer::Number(v) => *v,
                LearnerAnswer::Text(s) => match parse_number(s) {
                    Some(v) => v,
                    None => return false,
                },
                LearnerAnswer::Numbers(_) => return false,
            };
            within(given, *expected, tolerance)
        }
    }
}

/// `|a - b| <= tolerance`; NaN never matches.
pub fn within(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}
