//! Display formatting for durations and clock times.

use chrono::NaiveDateTime;

use crate::config::DisplaySettings;
use crate::models::ShiftRecord;

/// Formats a minute count as hours and minutes, e.g. `"8h 30m"`.
///
/// A negative count is rendered as `-` followed by the formatted magnitude.
///
/// # Example
///
/// ```
/// use attendance_engine::attendance::format_duration;
/// use attendance_engine::config::DisplaySettings;
///
/// let display = DisplaySettings::default();
/// assert_eq!(format_duration(510, &display), "8h 30m");
/// assert_eq!(format_duration(-45, &display), "-0h 45m");
/// ```
pub fn format_duration(minutes: i64, display: &DisplaySettings) -> String {
    let sign = if minutes < 0 { "-" } else { "" };
    let magnitude = minutes.unsigned_abs();
    format!(
        "{}{}{} {}{}",
        sign,
        magnitude / 60,
        display.hours_suffix,
        magnitude % 60,
        display.minutes_suffix
    )
}

/// Formats the time of day as 24-hour `HH:MM`.
pub fn format_time(time: &NaiveDateTime) -> String {
    time.format("%H:%M").to_string()
}

/// Formats a shift's start and end as `"HH:MM - HH:MM"`.
pub fn format_shift_times(shift: &ShiftRecord) -> String {
    format!(
        "{} - {}",
        format_time(&shift.start_time),
        format_time(&shift.end_time)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn test_format_duration_default_suffixes() {
        let display = DisplaySettings::default();
        assert_eq!(format_duration(480, &display), "8h 0m");
        assert_eq!(format_duration(59, &display), "0h 59m");
        assert_eq!(format_duration(0, &display), "0h 0m");
    }

    #[test]
    fn test_format_duration_custom_suffixes() {
        let display = DisplaySettings {
            hours_suffix: "ч".to_string(),
            minutes_suffix: "м".to_string(),
        };
        assert_eq!(format_duration(450, &display), "7ч 30м");
    }

    #[test]
    fn test_format_negative_duration() {
        let display = DisplaySettings::default();
        assert_eq!(format_duration(-480, &display), "-8h 0m");
    }

    #[test]
    fn test_format_time_is_24_hour() {
        assert_eq!(format_time(&make_datetime("2025-01-01 21:05:59")), "21:05");
        assert_eq!(format_time(&make_datetime("2025-01-01 00:00:00")), "00:00");
    }

    #[test]
    fn test_format_shift_times() {
        let shift = ShiftRecord {
            id: 1,
            employee: "A".to_string(),
            location: "X".to_string(),
            role: "Clerk".to_string(),
            start_time: make_datetime("2025-01-01 22:00:00"),
            end_time: make_datetime("2025-01-02 06:30:00"),
        };
        assert_eq!(format_shift_times(&shift), "22:00 - 06:30");
    }
}
