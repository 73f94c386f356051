//! Date-window filtering of employee aggregates.

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::{DateRange, EmployeeAggregate, ShiftRecord};

/// Keeps only the shifts that overlap the given calendar-day window.
///
/// The window runs from 00:00:00 on `start` to 23:59:59 on `end`. A shift is
/// kept when `shift.start <= window_end` and `shift.end >= window_start`, so a
/// shift that crosses either window boundary is kept whole. Planned and actual
/// shifts are filtered independently.
///
/// Aggregates left with no planned and no actual shifts are dropped. The order
/// of aggregates, and of shifts within each aggregate, is preserved. The input
/// is not modified; the result references the same shift records.
///
/// An inverted window (`end < start`) is not an error; it simply selects
/// little or nothing.
///
/// # Example
///
/// ```
/// use attendance_engine::attendance::{filter_by_range, group};
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
///     end_time: at("2025-01-02 02:00"),
/// }];
/// let groups = group(&planned, &[], false);
///
/// let jan_2 = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
/// assert_eq!(filter_by_range(&groups, jan_2, jan_2).len(), 1);
///
/// let jan_3 = NaiveDate::from_ymd_opt(2025, 1, 3).unwrap();
/// assert!(filter_by_range(&groups, jan_3, jan_3).is_empty());
/// ```
pub fn filter_by_range<'a>(
    aggregates: &[EmployeeAggregate<'a>],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<EmployeeAggregate<'a>> {
    filter_by_date_range(aggregates, &DateRange::new(start, end))
}

/// Same as [`filter_by_range`], taking the window as a [`DateRange`].
pub fn filter_by_date_range<'a>(
    aggregates: &[EmployeeAggregate<'a>],
    range: &DateRange,
) -> Vec<EmployeeAggregate<'a>> {
    let window_start = range.window_start();
    let window_end = range.window_end();

    aggregates
        .iter()
        .map(|aggregate| {
            aggregate.with_shifts(
                overlapping(&aggregate.planned_shifts, window_start, window_end),
                overlapping(&aggregate.actual_shifts, window_start, window_end),
            )
        })
        .filter(|aggregate| !aggregate.is_empty())
        .collect()
}

fn overlapping<'a>(
    shifts: &[&'a ShiftRecord],
    window_start: NaiveDateTime,
    window_end: NaiveDateTime,
) -> Vec<&'a ShiftRecord> {
    shifts
        .iter()
        .copied()
        .filter(|shift| shift.start_time <= window_end && shift.end_time >= window_start)
        .collect()
}
