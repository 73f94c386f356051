//! Shift record model.
//!
//! A [`ShiftRecord`] is one concrete shift instance, either planned (from the
//! roster) or actual (from time tracking). [`ScheduleData`] holds both lists as
//! they were loaded.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Represents one planned or actual shift.
///
/// Timestamps are wall-clock times in the engine's reporting timezone. The
/// record does not enforce `end_time > start_time`; an inverted record is kept
/// as supplied and reports a negative duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// Identifier of the record within its source list.
    pub id: u64,
    /// The employee working the shift.
    pub employee: String,
    /// The location (store) the shift is worked at.
    pub location: String,
    /// The role the employee works in.
    pub role: String,
    /// When the shift starts.
    pub start_time: NaiveDateTime,
    /// When the shift ends.
    pub end_time: NaiveDateTime,
}

impl ShiftRecord {
    /// Returns the length of the shift in whole minutes.
    ///
    /// Partial minutes are truncated toward zero. Inverted records give a
    /// negative value.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_engine::models::ShiftRecord;
    /// use chrono::NaiveDateTime;
    ///
    /// let shift = ShiftRecord {
    ///     id: 1,
    ///     employee: "A".to_string(),
    ///     location: "X".to_string(),
    ///     role: "Clerk".to_string(),
    ///     start_time: NaiveDateTime::parse_from_str("2025-01-01 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     end_time: NaiveDateTime::parse_from_str("2025-01-01 17:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    /// };
    /// assert_eq!(shift.duration_minutes(), 480);
    /// ```
    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }

    /// Returns true if the shift ends before it starts.
    pub fn is_inverted(&self) -> bool {
        self.end_time < self.start_time
    }

    /// Returns true if the shift starts or ends on the given calendar day.
    ///
    /// An overnight shift touches both the day it starts on and the day it
    /// ends on.
    pub fn touches_day(&self, day: NaiveDate) -> bool {
        self.start_time.date() == day || self.end_time.date() == day
    }
}

/// The planned and actual shift lists, as loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleData {
    /// Shifts from the roster.
    #[serde(default)]
    pub planned: Vec<ShiftRecord>,
    /// Shifts from time tracking.
    #[serde(default)]
    pub actual: Vec<ShiftRecord>,
}

impl ScheduleData {
    /// Creates schedule data from its two lists.
    pub fn new(planned: Vec<ShiftRecord>, actual: Vec<ShiftRecord>) -> Self {
        Self { planned, actual }
    }

    /// Returns the total number of records across both lists.
    pub fn len(&self) -> usize {
        self.planned.len() + self.actual.len()
    }

    /// Returns true if both lists are empty.
    pub fn is_empty(&self) -> bool {
        self.planned.is_empty() && self.actual.is_empty()
    }
}
