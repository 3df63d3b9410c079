//! Per-session aggregate statistics.

use std::collections::BTreeMap;

use crate::model::ProblemKind;
use crate::session::SessionLog;

/// Totals for one problem kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KindStats {
    pub attempted: usize,
    pub correct: usize,
    pub total_duration_secs: f64,
}

impl KindStats {
    /// Fraction answered correctly, 0.0 when nothing was attempted.
    pub fn accuracy(&self) -> f64 {
        if self.attempted == 0 {
            0.0
        } else {
            self.correct as f64 / self.attempted as f64
        }
    }

    pub fn mean_duration_secs(&self) -> f64 {
        if self.attempted == 0 {
            0.0
        } else {
            self.total_duration_secs / self.attempted as f64
        }
    }
}

/// Score plus a per-kind breakdown.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSummary {
    pub attempted: usize,
    pub correct: usize,
    pub per_kind: BTreeMap<ProblemKind, KindStats>,
}

impl SessionSummary {
    pub fn from_log(log: &SessionLog) -> Self {
        let mut summary = SessionSummary::default();
        for entry in log.entries() {
            let correct = entry.verdict.is_correct();
            summary.attempted += 1;
            summary.correct += usize::from(correct);

            let stats = summary.per_kind.entry(entry.kind).or_default();
            stats.attempted += 1;
            stats.correct += usize::from(correct);
            stats.total_duration_secs += entry.duration_secs;
        }
        summary
    }

    pub fn accuracy(&self) -> f64 {
        if self.attempted == 0 {
            0.0
        } else {
            self.correct as f64 / self.attempted as f64
        }
    }
}
