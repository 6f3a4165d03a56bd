use anyhow::{Context, Result};
use std::ffi::OsString;
use std::path::PathBuf;

/// Overrides the platform data directory when set.
pub(crate) const DATA_DIR_ENV: &str = "BUDGETAI_DATA_DIR";
pub(crate) const DB_FILE: &str = "budgetai.db";
pub(crate) const LOG_FILE: &str = "budgetai.log";

/// Directory holding the store and the TUI log, created if missing.
pub(crate) fn data_dir() -> Result<PathBuf> {
    resolve_data_dir(std::env::var_os(DATA_DIR_ENV))
}

pub(crate) fn db_path() -> Result<PathBuf> {
    Ok(data_dir()?.join(DB_FILE))
}

pub(crate) fn log_path() -> Result<PathBuf> {
    Ok(data_dir()?.join(LOG_FILE))
}

fn resolve_data_dir(override_dir: Option<OsString>) -> Result<PathBuf> {
    let dir = match override_dir.filter(|d| !d.is_empty()) {
        Some(d) => PathBuf::from(d),
        None => directories::ProjectDirs::from("com", "budgetai", "BudgetAI")
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?
            .data_dir()
            .to_path_buf(),
    };
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create data directory: {}", dir.display()))?;
    Ok(dir)
}

#[cfg(test)]
mod tests;
