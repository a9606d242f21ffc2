//! TOML-based application configuration.
//!
//! Stores team-level tuning that is not part of any single month:
//! - shift-hour overrides applied on top of the built-in catalog
//! - the master demand template (shift code -> daily headcount)
//! - full-time weekly hours used for target-hour accounting
//! - fairness scorer weights
//!
//! Configuration is stored at `~/.config/dienstplan/config.toml`.

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::engine::fairness::ScoreWeights;
use crate::error::{ConfigError, Result};
use crate::roster::FULL_TIME_WEEK_HOURS;

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/dienstplan/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Weekly hours of a 100% position, the base of target-hour accounting.
    #[serde(default = "default_full_week_hours")]
    pub full_time_week_hours: f64,
    /// Hour overrides per shift code, applied onto the standard catalog.
    #[serde(default)]
    pub shift_hours: HashMap<String, f64>,
    /// Master demand template: shift code -> required headcount per day.
    #[serde(default)]
    pub master_demand: BTreeMap<String, u32>,
    /// Fairness scorer weights.
    #[serde(default)]
    pub weights: ScoreWeights,
}

fn default_full_week_hours() -> f64 {
    FULL_TIME_WEEK_HOURS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            full_time_week_hours: default_full_week_hours(),
            shift_hours: HashMap::new(),
            master_demand: BTreeMap::new(),
            weights: ScoreWeights::default(),
        }
    }
}

impl Config {
    /// Path of the config file.
    pub fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk; a missing file yields (and writes) the defaults.
    ///
    /// # Errors
    /// Returns an error if an existing file cannot be parsed, or if the
    /// default config cannot be written.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(|e| {
                    ConfigError::LoadFailed {
                        path: path.clone(),
                        message: e.to_string(),
                    }
                })?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Load from disk, falling back to defaults on any failure.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Persist to disk.
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.full_time_week_hours, FULL_TIME_WEEK_HOURS);
        assert!(cfg.shift_hours.is_empty());
        assert!(cfg.master_demand.is_empty());
        assert_eq!(cfg.weights, ScoreWeights::default());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let cfg: Config = toml::from_str(
            "full_time_week_hours = 38.5\n\n[master_demand]\nTR = 2\nNR = 1\n",
        )
        .unwrap();
        assert_eq!(cfg.full_time_week_hours, 38.5);
        assert_eq!(cfg.master_demand.get("TR"), Some(&2));
        assert_eq!(cfg.weights, ScoreWeights::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut cfg = Config::default();
        cfg.shift_hours.insert("TR".to_string(), 8.0);
        cfg.master_demand.insert("NR".to_string(), 1);
        cfg.weights.underfill = 5.0;

        let text = toml::to_string_pretty(&cfg).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back.shift_hours.get("TR"), Some(&8.0));
        assert_eq!(back.master_demand.get("NR"), Some(&1));
        assert_eq!(back.weights.underfill, 5.0);
    }
}
