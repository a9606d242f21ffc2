mod config;
pub mod backup;
pub mod migrations;
pub mod plan_db;

pub use backup::MonthBackup;
pub use config::Config;
pub use plan_db::PlanDb;

use std::path::PathBuf;

use crate::error::Result;

/// Returns `~/.config/dienstplan[-dev]/` based on DIENSTPLAN_ENV.
///
/// Set DIENSTPLAN_ENV=dev to use a separate development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("DIENSTPLAN_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("dienstplan-dev")
    } else {
        base_dir.join("dienstplan")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
