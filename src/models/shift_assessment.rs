//! Shift assessment and status types.
//!
//! A [`ShiftAssessment`] is the classifier's verdict on one planned shift. It is
//! computed on demand for each displayed cell and never stored.

use serde::{Deserialize, Serialize};

use super::ShiftRecord;

/// The attendance status of a planned shift.
///
/// # Example
///
/// ```
/// use attendance_engine::models::ShiftStatus;
///
/// assert_eq!(ShiftStatus::LateAndEarlyLeave.to_string(), "late_and_early_leave");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftStatus {
    /// Worked as planned.
    OnTime,
    /// Started after the planned start.
    Late,
    /// Ended before the planned end.
    EarlyLeave,
    /// Both started late and ended early.
    LateAndEarlyLeave,
    /// No actual shift and absence tracking is on.
    Absent,
    /// No actual shift and absence tracking is off.
    Unconfirmed,
}

impl std::fmt::Display for ShiftStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShiftStatus::OnTime => write!(f, "on_time"),
            ShiftStatus::Late => write!(f, "late"),
            ShiftStatus::EarlyLeave => write!(f, "early_leave"),
            ShiftStatus::LateAndEarlyLeave => write!(f, "late_and_early_leave"),
            ShiftStatus::Absent => write!(f, "absent"),
            ShiftStatus::Unconfirmed => write!(f, "unconfirmed"),
        }
    }
}

/// The classifier's result for one planned shift.
///
/// Flags are mutually consistent: `is_absent` is never set together with
/// `is_late` or `is_early_leave`, and is only set when `actual` is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShiftAssessment<'a> {
    /// The planned shift being assessed.
    pub planned: &'a ShiftRecord,
    /// The actual shift matched to it, if any.
    pub actual: Option<&'a ShiftRecord>,
    /// Actual start is strictly after planned start.
    pub is_late: bool,
    /// Actual end is strictly before planned end.
    pub is_early_leave: bool,
    /// No actual shift while absence tracking is enabled.
    pub is_absent: bool,
    /// Realized minutes, or planned minutes when there is no actual shift.
    pub duration: i64,
}

impl ShiftAssessment<'_> {
    /// Collapses the flags into a single status.
    pub fn status(&self) -> ShiftStatus {
        match (self.actual, self.is_absent) {
            (None, true) => ShiftStatus::Absent,
            (None, false) => ShiftStatus::Unconfirmed,
            (Some(_), _) => match (self.is_late, self.is_early_leave) {
                (true, true) => ShiftStatus::LateAndEarlyLeave,
                (true, false) => ShiftStatus::Late,
                (false, true) => ShiftStatus::EarlyLeave,
                (false, false) => ShiftStatus::OnTime,
            },
        }
    }
}
