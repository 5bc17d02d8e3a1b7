mod config;

pub use config::{Config, DashboardConfig, TriageConfig};

use std::path::PathBuf;

use crate::error::{CoreError, Result};

/// Returns the data directory, creating it if needed.
///
/// `PLANWISE_HOME` overrides the location outright. Otherwise it is
/// `~/.config/planwise/`, or `~/.config/planwise-dev/` when
/// `PLANWISE_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os("PLANWISE_HOME") {
        Some(home) if !home.is_empty() => PathBuf::from(home),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("PLANWISE_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("planwise-dev")
            } else {
                base_dir.join("planwise")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| CoreError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}

/// `<data dir>/session.json`.
///
/// # Errors
/// Returns an error if the data directory is unavailable.
pub fn session_path() -> Result<PathBuf> {
    Ok(data_dir()?.join("session.json"))
}

/// `<data dir>/agenda.json`.
///
/// # Errors
/// Returns an error if the data directory is unavailable.
pub fn agenda_path() -> Result<PathBuf> {
    Ok(data_dir()?.join("agenda.json"))
}
