//! Tutor configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::checker::DEFAULT_TOLERANCE;

/// Where to persist session logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Csv,
    Json,
    All,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "all" => Ok(OutputFormat::All),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

/// Top-level satmath configuration. Every field has a default, so an empty
/// file is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TutorConfig {
    /// Grading tolerance for final answers.
    pub tolerance: f64,
    /// Tolerance for guided intermediate steps.
    pub step_tolerance: f64,
    /// Probability of an algebra problem when algebra is enabled.
    pub algebra_share: f64,
    /// Failed entries allowed per guided step (unset = unlimited).
    pub max_step_attempts: Option<u32>,
    /// Results file. With `format = "all"` the JSON copy uses the same stem.
    pub output: PathBuf,
    pub format: OutputFormat,
}

impl Default for TutorConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            step_tolerance: DEFAULT_TOLERANCE,
            algebra_share: 0.5,
            max_step_attempts: None,
            output: PathBuf::from("sat_math_results.csv"),
            format: OutputFormat::Csv,
        }
    }
}

impl TutorConfig {
    /// Reject values the session cannot run with.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            self.tolerance.is_finite() && self.tolerance >= 0.0,
            "tolerance must be a non-negative number"
        );
        anyhow::ensure!(
            self.step_tolerance.is_finite() && self.step_tolerance >= 0.0,
            "step_tolerance must be a non-negative number"
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.algebra_share),
            "algebra_share must be between 0.0 and 1.0"
        );
        if let Some(max) = self.max_step_attempts {
            anyhow::ensure!(max >= 1, "max_step_attempts must be at least 1");
        }
        Ok(())
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `satmath.toml` in the current directory
/// 2. `~/.config/satmath/config.toml`
/// 3. built-in defaults
pub fn load_config_from(path: Option<&Path>) -> Result<TutorConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("satmath.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|dir| dir.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let config = match config_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<TutorConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => TutorConfig::default(),
    };

    config.validate()?;
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("satmath"))
}
