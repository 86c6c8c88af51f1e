//! Configuration module
//!
//! Reads the engine settings from a TOML file
//! (default `~/.config/toll-fee/config.toml`). Every key is optional and
//! falls back to the reference values.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::application::services::toll_fee::{MAX_FEE, MAX_WINDOW_MINUTES};
use crate::domain::schedule::{default_intervals, Fee, FeeInterval, FeeSchedule};
use crate::domain::{ExemptVehicleTypes, FixedHolidayCalendar, VehicleType, WindowRule};
use crate::support::errors::ConfigError;

/// Default config location under the user's config directory.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("toll-fee")
        .join("config.toml")
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// trace, debug, info, warn, error
    pub level: String,
    /// "text" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Daily cap
    pub max_fee: Fee,
    /// Threshold for grouping consecutive passes
    pub window_minutes: u32,
    pub window_rule: WindowRule,
    pub exempt_vehicle_types: Vec<VehicleType>,
    pub holidays: Vec<NaiveDate>,
    pub schedule: Vec<FeeInterval>,
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_fee: MAX_FEE,
            window_minutes: MAX_WINDOW_MINUTES,
            window_rule: WindowRule::default(),
            exempt_vehicle_types: VehicleType::ALL
                .into_iter()
                .filter(|t| *t != VehicleType::Car)
                .collect(),
            holidays: Vec::new(),
            schedule: default_intervals(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Like [`AppConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn fee_schedule(&self) -> FeeSchedule {
        FeeSchedule::new(self.schedule.clone())
    }

    pub fn exempt_set(&self) -> ExemptVehicleTypes {
        ExemptVehicleTypes::new(self.exempt_vehicle_types.iter().copied())
    }

    pub fn holiday_calendar(&self) -> FixedHolidayCalendar {
        FixedHolidayCalendar::new(self.holidays.iter().copied())
    }
}

// ── Tests ──────────────────────────────────────────────────────
