//! Attendance view assembly.
//!
//! Runs the whole pipeline for one request: apply the mode's span limit to the
//! requested range, group the schedule, filter it to the range, then fill a
//! cell for every day of every remaining row.

use crate::config::AttendanceConfig;
use crate::models::{
    AttendanceRow, AttendanceView, DateRange, DayCell, OperatingMode, ScheduleData,
};

use super::day_grid::shift_for_day;
use super::formatting::{format_duration, format_shift_times};
use super::grouping::group;
use super::range_filter::filter_by_date_range;

/// Builds the attendance view of `schedule` for `range` in `mode`.
///
/// In basic mode the range is first clamped to
/// `config.range.basic_mode_max_days`; the view reports the effective range.
/// Every row gets one cell per day of that range, so callers serving
/// untrusted ranges bound them first with
/// [`ConfigLoader::view_range`](crate::config::ConfigLoader::view_range).
///
/// # Example
///
/// ```
/// use attendance_engine::attendance::build_view;
/// use attendance_engine::config::AttendanceConfig;
/// use attendance_engine::models::{DateRange, OperatingMode, ScheduleData};
/// use chrono::NaiveDate;
///
/// let schedule = ScheduleData::default();
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
/// );
///
/// let view = build_view(&schedule, range, OperatingMode::Basic, &AttendanceConfig::default());
/// assert!(view.is_empty());
/// assert_eq!(view.days.len(), 4);
/// ```
pub fn build_view<'a>(
    schedule: &'a ScheduleData,
    range: DateRange,
    mode: OperatingMode,
    config: &AttendanceConfig,
) -> AttendanceView<'a> {
    let range = range.limited_to(mode.span_limit(config.range.basic_mode_max_days));
    let days: Vec<_> = range.days().collect();

    let grouped = group(&schedule.planned, &schedule.actual, mode.track_actual());
    let filtered = filter_by_date_range(&grouped, &range);

    let rows = filtered
        .into_iter()
        .map(|aggregate| {
            let cells = days
                .iter()
                .map(|&date| {
                    let shift = shift_for_day(&aggregate, date, mode.absence_tracking());
                    DayCell {
                        date,
                        status: shift.map(|s| s.status()),
                        planned_time: shift.map(|s| format_shift_times(s.planned)),
                        actual_time: shift.and_then(|s| s.actual).map(format_shift_times),
                        duration_text: shift.map(|s| format_duration(s.duration, &config.display)),
                        shift,
                    }
                })
                .collect();
            AttendanceRow { aggregate, cells }
        })
        .collect();

    AttendanceView {
        mode,
        range,
        days,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ShiftRecord, ShiftStatus};
    use chrono::{NaiveDate, NaiveDateTime};

    fn make_datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_shift(id: u64, employee: &str, start: &str, end: &str) -> ShiftRecord {
        ShiftRecord {
            id,
            employee: employee.to_string(),
            location: "X".to_string(),
            role: "Clerk".to_string(),
            start_time: make_datetime(start),
            end_time: make_datetime(end),
        }
    }

    fn schedule() -> ScheduleData {
        ScheduleData::new(
            vec![
                make_shift(1, "A", "2025-01-01 09:00", "2025-01-01 17:00"),
                make_shift(2, "A", "2025-01-02 09:00", "2025-01-02 17:00"),
                make_shift(3, "B", "2025-01-08 09:00", "2025-01-08 17:00"),
            ],
            vec![make_shift(10, "A", "2025-01-01 09:15", "2025-01-01 16:45")],
        )
    }

    #[test]
    fn test_advanced_view_marks_late_and_absent() {
        let schedule = schedule();
        let range = DateRange::new(make_date("2025-01-01"), make_date("2025-01-03"));

        let view = build_view(&schedule, range, OperatingMode::Advanced, &AttendanceConfig::default());

        assert_eq!(view.rows.len(), 1);
        let cells = &view.rows[0].cells;
        assert_eq!(cells.len(), 3);

        assert_eq!(cells[0].status, Some(ShiftStatus::LateAndEarlyLeave));
        assert_eq!(cells[0].planned_time.as_deref(), Some("09:00 - 17:00"));
        assert_eq!(cells[0].actual_time.as_deref(), Some("09:15 - 16:45"));
        assert_eq!(cells[0].duration_text.as_deref(), Some("7h 30m"));

        assert_eq!(cells[1].status, Some(ShiftStatus::Absent));
        assert!(cells[1].actual_time.is_none());
        assert!(cells[2].is_empty());
    }

    #[test]
    fn test_basic_view_ignores_actual_and_clamps_range() {
        let schedule = schedule();
        let range = DateRange::new(make_date("2025-01-01"), make_date("2025-01-10"));

        let view = build_view(&schedule, range, OperatingMode::Basic, &AttendanceConfig::default());

        assert_eq!(view.range.end, make_date("2025-01-04"));
        assert_eq!(view.days.len(), 4);
        assert_eq!(view.rows.len(), 1);
        assert!(view.rows[0].aggregate.actual_shifts.is_empty());
        assert_eq!(view.rows[0].cells[0].status, Some(ShiftStatus::Unconfirmed));
        assert_eq!(view.rows[0].cells[0].duration_text.as_deref(), Some("8h 0m"));
    }

    #[test]
    fn test_advanced_view_has_no_span_limit() {
        let schedule = schedule();
        let range = DateRange::new(make_date("2025-01-01"), make_date("2025-01-10"));

        let view = build_view(&schedule, range, OperatingMode::Advanced, &AttendanceConfig::default());

        assert_eq!(view.days.len(), 10);
        assert_eq!(view.rows.len(), 2);
    }

    #[test]
    fn test_view_empty_when_nothing_in_range() {
        let schedule = schedule();
        let range = DateRange::single_day(make_date("2025-03-01"));

        let view = build_view(&schedule, range, OperatingMode::Advanced, &AttendanceConfig::default());

        assert!(view.is_empty());
        assert_eq!(view.days.len(), 1);
    }
}
