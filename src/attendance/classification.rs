//! Shift classification: lateness, early leave and absence.

use crate::models::{ShiftAssessment, ShiftRecord};

/// Classifies a planned shift against its actual counterpart.
///
/// Without an actual shift the planned shift is never late or early, and is
/// absent only when `absence_tracking_enabled` is set. The duration is then
/// the planned length.
///
/// With an actual shift:
/// - late when the actual start is strictly after the planned start
/// - early leave when the actual end is strictly before the planned end
/// - never absent
/// - the duration is the actual length
///
/// Durations are whole minutes and are not clamped: an inverted record gives a
/// negative duration.
///
/// # Example
///
/// ```
/// use attendance_engine::attendance::classify;
/// use attendance_engine::models::ShiftRecord;
/// use chrono::NaiveDateTime;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
/// let shift = |start, end| ShiftRecord {
///     id: 1,
///     employee: "A".to_string(),
///     location: "X".to_string(),
///     role: "Clerk".to_string(),
///     start_time: at(start),
///     end_time: at(end),
/// };
///
/// let planned = shift("2025-01-01 09:00", "2025-01-01 17:00");
/// let actual = shift("2025-01-01 09:15", "2025-01-01 16:45");
///
/// let result = classify(&planned, Some(&actual), true);
/// assert!(result.is_late);
/// assert!(result.is_early_leave);
/// assert!(!result.is_absent);
/// assert_eq!(result.duration, 450);
/// ```
pub fn classify<'a>(
    planned: &'a ShiftRecord,
    actual: Option<&'a ShiftRecord>,
    absence_tracking_enabled: bool,
) -> ShiftAssessment<'a> {
    match actual {
        None => ShiftAssessment {
            planned,
            actual: None,
            is_late: false,
            is_early_leave: false,
            is_absent: absence_tracking_enabled,
            duration: planned.duration_minutes(),
        },
        Some(actual) => ShiftAssessment {
            planned,
            actual: Some(actual),
            is_late: actual.start_time > planned.start_time,
            is_early_leave: actual.end_time < planned.end_time,
            is_absent: false,
            duration: actual.duration_minutes(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShiftStatus;
    use chrono::NaiveDateTime;

    fn make_datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    fn make_shift(start: &str, end: &str) -> ShiftRecord {
        ShiftRecord {
            id: 1,
            employee: "A".to_string(),
            location: "X".to_string(),
            role: "Clerk".to_string(),
            start_time: make_datetime(start),
            end_time: make_datetime(end),
        }
    }

    fn planned() -> ShiftRecord {
        make_shift("2025-01-01 09:00", "2025-01-01 17:00")
    }

    #[test]
    fn test_missing_actual_is_absent_with_absence_tracking() {
        let planned = planned();
        let result = classify(&planned, None, true);

        assert!(result.is_absent);
        assert!(!result.is_late);
        assert!(!result.is_early_leave);
        assert_eq!(result.duration, 480);
        assert_eq!(result.status(), ShiftStatus::Absent);
    }

    #[test]
    fn test_missing_actual_is_not_absent_without_absence_tracking() {
        let planned = planned();
        let result = classify(&planned, None, false);

        assert!(!result.is_absent);
        assert_eq!(result.duration, 480);
        assert_eq!(result.status(), ShiftStatus::Unconfirmed);
    }

    #[test]
    fn test_exact_start_is_on_time() {
        let planned = planned();
        let actual = make_shift("2025-01-01 09:00", "2025-01-01 17:00");
        let result = classify(&planned, Some(&actual), true);

        assert!(!result.is_late);
        assert!(!result.is_early_leave);
        assert_eq!(result.status(), ShiftStatus::OnTime);
    }

    #[test]
    fn test_one_minute_late() {
        let planned = planned();
        let actual = make_shift("2025-01-01 09:01", "2025-01-01 17:00");
        let result = classify(&planned, Some(&actual), false);

        assert!(result.is_late);
        assert!(!result.is_early_leave);
        assert_eq!(result.duration, 479);
        assert_eq!(result.status(), ShiftStatus::Late);
    }

    #[test]
    fn test_early_arrival_and_overtime_is_on_time() {
        let planned = planned();
        let actual = make_shift("2025-01-01 08:45", "2025-01-01 17:30");
        let result = classify(&planned, Some(&actual), true);

        assert!(!result.is_late);
        assert!(!result.is_early_leave);
        assert_eq!(result.duration, 525);
    }

    #[test]
    fn test_early_leave() {
        let planned = planned();
        let actual = make_shift("2025-01-01 09:00", "2025-01-01 16:59");
        let result = classify(&planned, Some(&actual), true);

        assert!(!result.is_late);
        assert!(result.is_early_leave);
        assert_eq!(result.status(), ShiftStatus::EarlyLeave);
    }

    #[test]
    fn test_actual_present_is_never_absent() {
        let planned = planned();
        let actual = make_shift("2025-01-01 12:00", "2025-01-01 13:00");

        for absence_tracking in [true, false] {
            let result = classify(&planned, Some(&actual), absence_tracking);
            assert!(!result.is_absent);
            assert_eq!(result.status(), ShiftStatus::LateAndEarlyLeave);
        }
    }

    #[test]
    fn test_late_and_early_leave_scenario() {
        let planned = planned();
        let actual = make_shift("2025-01-01 09:15", "2025-01-01 16:45");
        let result = classify(&planned, Some(&actual), true);

        assert!(result.is_late);
        assert!(result.is_early_leave);
        assert!(!result.is_absent);
        assert_eq!(result.duration, 450);
        assert_eq!(result.actual.map(|a| a.id), Some(1));
    }

    #[test]
    fn test_inverted_planned_shift_passes_negative_duration_through() {
        let planned = make_shift("2025-01-01 17:00", "2025-01-01 09:00");
        let result = classify(&planned, None, true);

        assert_eq!(result.duration, -480);
        assert!(result.is_absent);
    }

    #[test]
    fn test_zero_length_actual_shift() {
        let planned = planned();
        let actual = make_shift("2025-01-01 09:00", "2025-01-01 09:00");
        let result = classify(&planned, Some(&actual), true);

        assert_eq!(result.duration, 0);
        assert!(result.is_early_leave);
    }
}
