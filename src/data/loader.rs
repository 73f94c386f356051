//! Schedule data loading.
//!
//! Reads the planned/actual shift lists from JSON and turns every ISO-8601
//! timestamp into a wall-clock time in the reporting timezone. This is the
//! only place timestamps are validated: the analysis functions assume the
//! records they get are well-formed.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{ScheduleData, ShiftRecord};

/// Offset-qualified layouts RFC 3339 leaves out: no seconds, `+HHMM` and
/// `+HH` offsets.
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M%#z"];

/// Naive timestamp layouts, tried after the offset-qualified ones.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// A shift record as it appears in input JSON.
///
/// Field names follow the source data (`startTime`, `store`); the snake_case
/// forms and `location` are accepted as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawShiftRecord {
    /// Identifier of the record within its list.
    pub id: u64,
    /// The employee working the shift.
    pub employee: String,
    /// The location of the shift.
    #[serde(alias = "store")]
    pub location: String,
    /// The role worked.
    pub role: String,
    /// ISO-8601 start timestamp.
    #[serde(alias = "start_time")]
    pub start_time: String,
    /// ISO-8601 end timestamp.
    #[serde(alias = "end_time")]
    pub end_time: String,
}

/// Planned and actual lists as they appear in input JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawScheduleData {
    /// Planned shifts.
    #[serde(default)]
    pub planned: Vec<RawShiftRecord>,
    /// Actual shifts.
    #[serde(default)]
    pub actual: Vec<RawShiftRecord>,
}

/// Loads schedule data and converts it to [`ScheduleData`].
///
/// # Example
///
/// ```
/// use attendance_engine::config::ConfigLoader;
/// use attendance_engine::data::ScheduleLoader;
///
/// let json = r#"{
///     "planned": [{
///         "id": 1, "employee": "A", "store": "X", "role": "Clerk",
///         "startTime": "2025-01-01T09:00", "endTime": "2025-01-01T17:00"
///     }],
///     "actual": []
/// }"#;
///
/// let data = ScheduleLoader::from_json_str(json, "inline", &ConfigLoader::default()).unwrap();
/// assert_eq!(data.planned[0].location, "X");
/// assert_eq!(data.planned[0].duration_minutes(), 480);
/// ```
pub struct ScheduleLoader;

impl ScheduleLoader {
    /// Loads schedule data from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P, config: &ConfigLoader) -> EngineResult<ScheduleData> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ScheduleNotFound {
            path: path_str.clone(),
        })?;

        Self::from_json_str(&content, &path_str, config)
    }

    /// Parses schedule data from JSON text. `source` names the text in errors.
    pub fn from_json_str(
        json: &str,
        source: &str,
        config: &ConfigLoader,
    ) -> EngineResult<ScheduleData> {
        let raw: RawScheduleData =
            serde_json::from_str(json).map_err(|e| EngineError::ScheduleParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;

        let data = Self::from_raw(raw, config)?;
        info!(
            source = %source,
            planned = data.planned.len(),
            actual = data.actual.len(),
            "Loaded schedule data"
        );
        Ok(data)
    }

    /// Converts already-decoded raw records.
    pub fn from_raw(raw: RawScheduleData, config: &ConfigLoader) -> EngineResult<ScheduleData> {
        let planned = Self::convert_all(raw.planned, config)?;
        let actual = Self::convert_all(raw.actual, config)?;
        Ok(ScheduleData::new(planned, actual))
    }

    fn convert_all(
        records: Vec<RawShiftRecord>,
        config: &ConfigLoader,
    ) -> EngineResult<Vec<ShiftRecord>> {
        records
            .into_iter()
            .map(|record| Self::convert(record, config))
            .collect()
    }

    fn convert(record: RawShiftRecord, config: &ConfigLoader) -> EngineResult<ShiftRecord> {
        let offset = config.offset();
        let start_time = parse_timestamp(&record.start_time, offset).ok_or_else(|| {
            EngineError::InvalidTimestamp {
                shift_id: record.id,
                value: record.start_time.clone(),
            }
        })?;
        let end_time = parse_timestamp(&record.end_time, offset).ok_or_else(|| {
            EngineError::InvalidTimestamp {
                shift_id: record.id,
                value: record.end_time.clone(),
            }
        })?;

        let shift = ShiftRecord {
            id: record.id,
            employee: record.employee,
            location: record.location,
            role: record.role,
            start_time,
            end_time,
        };

        if shift.is_inverted() {
            if config.config().engine.reject_inverted_shifts {
                return Err(EngineError::InvalidShift {
                    shift_id: shift.id,
                    message: format!(
                        "end time {} is before start time {}",
                        shift.end_time, shift.start_time
                    ),
                });
            }
            warn!(shift_id = shift.id, employee = %shift.employee, "Shift ends before it starts");
        }

        Ok(shift)
    }
}

/// Parses an ISO-8601 timestamp into wall-clock time at `offset`.
///
/// Accepts ISO-8601 date-times with or without seconds, either naive or
/// qualified by `Z`, `+HH:MM`, `+HHMM` or `+HH` (converted to `offset`), and
/// bare dates (midnight). Returns `None` for anything else.
///
/// # Example
///
/// ```
/// use attendance_engine::data::parse_timestamp;
/// use chrono::FixedOffset;
///
/// let utc = FixedOffset::east_opt(0).unwrap();
/// let t = parse_timestamp("2025-01-01T12:00:00+03:00", utc).unwrap();
/// assert_eq!(t.to_string(), "2025-01-01 09:00:00");
/// assert!(parse_timestamp("not a date", utc).is_none());
/// ```
pub fn parse_timestamp(value: &str, offset: FixedOffset) -> Option<NaiveDateTime> {
    let value = value.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Some(instant.with_timezone(&offset).naive_local());
    }
    if let Some(instant) = OFFSET_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(value, format).ok())
    {
        return Some(instant.with_timezone(&offset).naive_local());
    }
    // `Z` after a time without seconds
    if let Some(utc) = value.strip_suffix(['Z', 'z']).and_then(parse_naive) {
        return Some(utc.and_utc().with_timezone(&offset).naive_local());
    }

    parse_naive(value).or_else(|| {
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .ok()
            .map(|date| date.and_time(NaiveTime::default()))
    })
}

fn parse_naive(value: &str) -> Option<NaiveDateTime> {
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}
