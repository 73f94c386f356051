//! Per-day cell selection for the attendance grid.
//!
//! The grid shows one column per calendar day. Each cell shows at most one
//! planned shift, the first one that starts or ends on that day, together with
//! the first actual shift that starts or ends on the same day.

use chrono::NaiveDate;

use crate::models::{EmployeeAggregate, ShiftAssessment};

use super::classification::classify;

/// Picks and classifies the shift shown in an aggregate's cell for `day`.
///
/// Returns `None` when no planned shift starts or ends on `day`, even if an
/// actual shift does. An overnight shift appears in the cells of both days it
/// touches.
///
/// # Example
///
/// ```
/// use attendance_engine::attendance::{group, shift_for_day};
/// use attendance_engine::models::ShiftRecord;
/// use chrono::{NaiveDate, NaiveDateTime};
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
/// let planned = vec![ShiftRecord {
///     id: 1,
///     employee: "A".to_string(),
///     location: "X".to_string(),
///     role: "Clerk".to_string(),
///     start_time: at("2025-01-01 22:00"),
///     end_time: at("2025-01-02 06:00"),
/// }];
/// let groups = group(&planned, &[], true);
///
/// let jan_2 = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
/// let cell = shift_for_day(&groups[0], jan_2, true).unwrap();
/// assert!(cell.is_absent);
/// ```
pub fn shift_for_day<'a>(
    aggregate: &EmployeeAggregate<'a>,
    day: NaiveDate,
    absence_tracking_enabled: bool,
) -> Option<ShiftAssessment<'a>> {
    let planned = aggregate
        .planned_shifts
        .iter()
        .copied()
        .find(|shift| shift.touches_day(day))?;
    let actual = aggregate
        .actual_shifts
        .iter()
        .copied()
        .find(|shift| shift.touches_day(day));

    Some(classify(planned, actual, absence_tracking_enabled))
}
