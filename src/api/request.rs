//! Request types for the Attendance Engine API.
//!
//! This module defines the query string of `GET /attendance` and the JSON body
//! of `POST /attendance`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::ConfigLoader;
use crate::data::{RawScheduleData, RawShiftRecord};
use crate::models::{DateRange, OperatingMode, QuickRange};

/// Query parameters for `GET /attendance`.
///
/// All parameters are optional. `quick` takes precedence over `start`/`end`.
/// With neither `start` nor `end` the configured default range from today is
/// used. A lone `start` or `end` edits that default range the way the date
/// picker does (see [`DateRange::with_start`] and [`DateRange::with_end`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceQuery {
    /// First day of the range (inclusive).
    #[serde(default)]
    pub start: Option<NaiveDate>,
    /// Last day of the range (inclusive).
    #[serde(default)]
    pub end: Option<NaiveDate>,
    /// Operating mode; the configured default when absent.
    #[serde(default)]
    pub mode: Option<OperatingMode>,
    /// Preset range starting today.
    #[serde(default)]
    pub quick: Option<QuickRange>,
}

impl AttendanceQuery {
    /// Returns the requested mode or the configured default.
    pub fn mode_or_default(&self, config: &ConfigLoader) -> OperatingMode {
        self.mode.unwrap_or_else(|| config.default_mode())
    }

    /// Resolves the requested range against `today`.
    ///
    /// The span limit is applied only to presets here; the view builder
    /// applies it to every range.
    pub fn resolve_range(
        &self,
        config: &ConfigLoader,
        mode: OperatingMode,
        today: NaiveDate,
    ) -> DateRange {
        if let Some(quick) = self.quick {
            return quick.resolve(today, config.span_limit(mode));
        }

        let default_range = config.default_range(today);
        let span_limit = config.span_limit(mode);
        match (self.start, self.end) {
            (Some(start), Some(end)) => DateRange::new(start, end),
            (Some(start), None) => default_range.with_start(start, span_limit),
            (None, Some(end)) => default_range.with_end(end, span_limit),
            (None, None) => default_range,
        }
    }
}

/// Request body for `POST /attendance`.
///
/// Carries its own planned and actual records instead of using the
/// pre-loaded schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRequest {
    /// Planned shifts.
    #[serde(default)]
    pub planned: Vec<RawShiftRecord>,
    /// Actual shifts.
    #[serde(default)]
    pub actual: Vec<RawShiftRecord>,
    /// First day of the range (inclusive).
    pub start: NaiveDate,
    /// Last day of the range (inclusive).
    pub end: NaiveDate,
    /// Operating mode; the configured default when absent.
    #[serde(default)]
    pub mode: Option<OperatingMode>,
}

impl AttendanceRequest {
    /// Splits the request into its raw records and its range.
    pub fn into_parts(self) -> (RawScheduleData, DateRange, Option<OperatingMode>) {
        (
            RawScheduleData {
                planned: self.planned,
                actual: self.actual,
            },
            DateRange::new(self.start, self.end),
            self.mode,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_empty_query_uses_defaults() {
        let config = ConfigLoader::default();
        let query = AttendanceQuery::default();
        let today = make_date("2025-01-01");

        let mode = query.mode_or_default(&config);
        assert_eq!(mode, OperatingMode::Basic);
        assert_eq!(
            query.resolve_range(&config, mode, today),
            DateRange::new(today, make_date("2025-01-04"))
        );
    }

    #[test]
    fn test_quick_range_takes_precedence() {
        let config = ConfigLoader::default();
        let query = AttendanceQuery {
            start: Some(make_date("2024-06-01")),
            end: Some(make_date("2024-06-02")),
            mode: Some(OperatingMode::Advanced),
            quick: Some(QuickRange::OneWeek),
        };
        let today = make_date("2025-01-01");

        let range = query.resolve_range(&config, OperatingMode::Advanced, today);
        assert_eq!(range, DateRange::new(today, make_date("2025-01-07")));

        let range = query.resolve_range(&config, OperatingMode::Basic, today);
        assert_eq!(range, DateRange::new(today, make_date("2025-01-04")));
    }

    #[test]
    fn test_explicit_range_passes_through() {
        let config = ConfigLoader::default();
        let query = AttendanceQuery {
            start: Some(make_date("2025-01-05")),
            end: Some(make_date("2025-01-02")),
            ..Default::default()
        };

        let range = query.resolve_range(&config, OperatingMode::Basic, make_date("2025-01-01"));
        assert!(range.is_inverted());
    }

    #[test]
    fn test_lone_start_past_default_end_moves_end() {
        let config = ConfigLoader::default();
        let query = AttendanceQuery {
            start: Some(make_date("2025-01-10")),
            ..Default::default()
        };

        let range = query.resolve_range(&config, OperatingMode::Advanced, make_date("2025-01-01"));
        assert_eq!(range, DateRange::new(make_date("2025-01-10"), make_date("2025-01-11")));
    }

    #[test]
    fn test_lone_start_inside_default_range_keeps_end() {
        let config = ConfigLoader::default();
        let query = AttendanceQuery {
            start: Some(make_date("2025-01-02")),
            ..Default::default()
        };

        let range = query.resolve_range(&config, OperatingMode::Basic, make_date("2025-01-01"));
        assert_eq!(range, DateRange::new(make_date("2025-01-02"), make_date("2025-01-04")));
    }

    #[test]
    fn test_lone_end_is_clamped_in_basic_mode() {
        let config = ConfigLoader::default();
        let query = AttendanceQuery {
            end: Some(make_date("2025-01-20")),
            ..Default::default()
        };
        let today = make_date("2025-01-01");

        let range = query.resolve_range(&config, OperatingMode::Basic, today);
        assert_eq!(range, DateRange::new(today, make_date("2025-01-04")));

        let range = query.resolve_range(&config, OperatingMode::Advanced, today);
        assert_eq!(range, DateRange::new(today, make_date("2025-01-20")));
    }

    #[test]
    fn test_request_body_deserialization() {
        let json = r#"{
            "planned": [{
                "id": 1, "employee": "A", "store": "X", "role": "Clerk",
                "startTime": "2025-01-01T09:00", "endTime": "2025-01-01T17:00"
            }],
            "start": "2025-01-01",
            "end": "2025-01-01",
            "mode": "advanced"
        }"#;

        let request: AttendanceRequest = serde_json::from_str(json).unwrap();
        let (raw, range, mode) = request.into_parts();

        assert_eq!(raw.planned.len(), 1);
        assert!(raw.actual.is_empty());
        assert_eq!(range, DateRange::single_day(make_date("2025-01-01")));
        assert_eq!(mode, Some(OperatingMode::Advanced));
    }
}
