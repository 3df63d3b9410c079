//! satmath-report — persistence of session logs.
//!
//! CSV is the learner-facing results file; JSON keeps the full structured
//! log (problem kinds, parsed answers) for later analysis.

pub mod csv;
pub mod json;

pub use csv::write_csv_report;
pub use json::{load_json, save_json};
