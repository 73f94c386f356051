//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the attendance
//! configuration from a YAML file.

use chrono::{FixedOffset, NaiveDate, Offset, Utc};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{DateRange, OperatingMode};

use super::types::AttendanceConfig;

/// The configuration file name inside a configuration directory.
pub const CONFIG_FILE_NAME: &str = "attendance.yaml";

/// Loads and provides access to the attendance configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// └── attendance.yaml   # engine, range and display settings
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Default mode: {}", loader.default_mode());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AttendanceConfig,
    offset: FixedOffset,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - `attendance.yaml` is missing
    /// - the file contains invalid YAML
    /// - a setting is out of range or the UTC offset cannot be parsed
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let config_path = path.as_ref().join(CONFIG_FILE_NAME);
        let path_str = config_path.display().to_string();

        let content = fs::read_to_string(&config_path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: AttendanceConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        debug!(path = %path_str, "Loaded attendance configuration");
        Self::from_config(config)
    }

    /// Validates an already-built configuration.
    pub fn from_config(config: AttendanceConfig) -> EngineResult<Self> {
        if config.range.basic_mode_max_days == 0 {
            return Err(EngineError::InvalidSetting {
                field: "range.basic_mode_max_days".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if config.range.default_span_days == 0 {
            return Err(EngineError::InvalidSetting {
                field: "range.default_span_days".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if config.range.max_view_days < config.range.basic_mode_max_days {
            return Err(EngineError::InvalidSetting {
                field: "range.max_view_days".to_string(),
                message: format!(
                    "must be at least range.basic_mode_max_days ({})",
                    config.range.basic_mode_max_days
                ),
            });
        }

        let offset = config
            .engine
            .utc_offset
            .parse::<FixedOffset>()
            .map_err(|e| EngineError::InvalidSetting {
                field: "engine.utc_offset".to_string(),
                message: format!("'{}' is not a UTC offset: {}", config.engine.utc_offset, e),
            })?;

        Ok(Self { config, offset })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &AttendanceConfig {
        &self.config
    }

    /// Returns the reporting timezone offset.
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Returns the mode used when a request does not name one.
    pub fn default_mode(&self) -> OperatingMode {
        self.config.engine.default_mode
    }

    /// Returns the span limit that applies in `mode`.
    pub fn span_limit(&self, mode: OperatingMode) -> Option<u32> {
        mode.span_limit(self.config.range.basic_mode_max_days)
    }

    /// Applies the mode's span limit to `range` and checks the result against
    /// `range.max_view_days`.
    ///
    /// An inverted range has no days and always passes.
    pub fn view_range(&self, range: DateRange, mode: OperatingMode) -> EngineResult<DateRange> {
        let range = range.limited_to(self.span_limit(mode));
        let max_days = self.config.range.max_view_days;
        if range.day_count() > i64::from(max_days) {
            return Err(EngineError::RangeTooLong {
                range: range.to_string(),
                days: range.day_count(),
                max_days,
            });
        }
        Ok(range)
    }

    /// Returns today's date in the reporting timezone.
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.offset).date_naive()
    }

    /// Returns the range shown when none is requested, starting `today`.
    pub fn default_range(&self, today: NaiveDate) -> DateRange {
        DateRange::starting_on(today, self.config.range.default_span_days)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self {
            config: AttendanceConfig::default(),
            offset: Utc.fix(),
        }
    }
}
