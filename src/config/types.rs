//! Configuration types for the attendance engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from `attendance.yaml`. Every section and field has a
//! default, so a partial file is valid.

use serde::{Deserialize, Serialize};

use crate::models::OperatingMode;

/// Engine-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Mode used when a request does not name one.
    #[serde(default)]
    pub default_mode: OperatingMode,
    /// Reporting timezone as a fixed UTC offset, e.g. `"+03:00"`.
    ///
    /// Offset-qualified timestamps are converted to this offset; naive
    /// timestamps are taken as already being in it.
    #[serde(default = "default_utc_offset")]
    pub utc_offset: String,
    /// Reject shifts whose end is before their start when loading data.
    #[serde(default)]
    pub reject_inverted_shifts: bool,
}

fn default_utc_offset() -> String {
    "+00:00".to_string()
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            default_mode: OperatingMode::default(),
            utc_offset: default_utc_offset(),
            reject_inverted_shifts: false,
        }
    }
}

/// Date range settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeSettings {
    /// Longest range, in days, allowed in basic mode.
    #[serde(default = "default_basic_mode_max_days")]
    pub basic_mode_max_days: u32,
    /// Length, in days, of the range shown when none is requested.
    #[serde(default = "default_span_days")]
    pub default_span_days: u32,
    /// Longest range, in days, the API will build a view for in any mode.
    #[serde(default = "default_max_view_days")]
    pub max_view_days: u32,
}

fn default_basic_mode_max_days() -> u32 {
    4
}

fn default_span_days() -> u32 {
    4
}

fn default_max_view_days() -> u32 {
    366
}

impl Default for RangeSettings {
    fn default() -> Self {
        Self {
            basic_mode_max_days: default_basic_mode_max_days(),
            default_span_days: default_span_days(),
            max_view_days: default_max_view_days(),
        }
    }
}

/// Display settings for formatted durations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Suffix after the hour count.
    #[serde(default = "default_hours_suffix")]
    pub hours_suffix: String,
    /// Suffix after the minute count.
    #[serde(default = "default_minutes_suffix")]
    pub minutes_suffix: String,
}

fn default_hours_suffix() -> String {
    "h".to_string()
}

fn default_minutes_suffix() -> String {
    "m".to_string()
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            hours_suffix: default_hours_suffix(),
            minutes_suffix: default_minutes_suffix(),
        }
    }
}

/// The complete attendance configuration loaded from `attendance.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceConfig {
    /// Engine settings.
    #[serde(default)]
    pub engine: EngineSettings,
    /// Date range settings.
    #[serde(default)]
    pub range: RangeSettings,
    /// Display settings.
    #[serde(default)]
    pub display: DisplaySettings,
}
