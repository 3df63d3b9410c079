//! satmath-core — problem generation, answer checking, and guided solving.
//!
//! This crate holds the data model and quiz logic that the report writer
//! and the CLI build on. All learner interaction goes through the
//! [`traits::Terminal`] seam.

pub mod checker;
pub mod config;
pub mod error;
pub mod generator;
pub mod guided;
pub mod mock;
pub mod model;
pub mod session;
pub mod statistics;
pub mod terminal;
pub mod traits;
