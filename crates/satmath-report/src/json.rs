//! JSON persistence of the full session log.

use std::path::Path;

use anyhow::{Context, Result};

use satmath_core::session::SessionLog;

/// Save the log as pretty-printed JSON.
pub fn save_json(log: &SessionLog, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(log).context("failed to serialize session log")?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, json)
        .with_context(|| format!("failed to write session log to {}", path.display()))?;
    Ok(())
}

/// Load a log previously written by [`save_json`].
pub fn load_json(path: &Path) -> Result<SessionLog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read session log from {}", path.display()))?;
    let log: SessionLog =
        serde_json::from_str(&content).context("failed to parse session log JSON")?;
    Ok(log)
}
