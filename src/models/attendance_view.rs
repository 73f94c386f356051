//! Attendance view models.
//!
//! This module contains the [`AttendanceView`] returned to the presentation
//! layer: one row per employee and location, one cell per day of the selected
//! range.

use chrono::NaiveDate;
use serde::Serialize;

use super::{DateRange, EmployeeAggregate, OperatingMode, ShiftAssessment, ShiftStatus};

/// One day's cell in an employee row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell<'a> {
    /// The calendar day of the cell.
    pub date: NaiveDate,
    /// The classified shift shown in the cell, if any.
    pub shift: Option<ShiftAssessment<'a>>,
    /// Status of the shown shift.
    pub status: Option<ShiftStatus>,
    /// Planned start and end as `"HH:MM - HH:MM"`.
    pub planned_time: Option<String>,
    /// Actual start and end as `"HH:MM - HH:MM"`.
    pub actual_time: Option<String>,
    /// Realized (or planned) duration, e.g. `"7h 30m"`.
    pub duration_text: Option<String>,
}

impl DayCell<'_> {
    /// Returns true if no shift is shown in the cell.
    pub fn is_empty(&self) -> bool {
        self.shift.is_none()
    }
}

/// One employee at one location, with a cell per day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceRow<'a> {
    /// The filtered aggregate backing the row.
    #[serde(flatten)]
    pub aggregate: EmployeeAggregate<'a>,
    /// One cell per day of the view's range, in date order.
    pub cells: Vec<DayCell<'a>>,
}

/// The complete attendance view for one mode and date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceView<'a> {
    /// The mode the view was computed in.
    pub mode: OperatingMode,
    /// The effective range after applying the mode's span limit.
    pub range: DateRange,
    /// Every day of the effective range.
    pub days: Vec<NaiveDate>,
    /// Rows for employees with at least one shift in the range.
    pub rows: Vec<AttendanceRow<'a>>,
}

impl AttendanceView<'_> {
    /// Returns true if no employee has a shift in the range.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
