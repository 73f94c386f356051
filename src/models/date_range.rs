//! Date range and quick-range presets.
//!
//! A [`DateRange`] is an inclusive pair of calendar dates. The range filter
//! widens it to whole days: from 00:00:00 on the start date to 23:59:59 on the
//! end date. The span-limit helpers keep a range within the number of days the
//! current mode allows.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// An inclusive range of calendar days.
///
/// # Example
///
/// ```
/// use attendance_engine::models::DateRange;
/// use chrono::NaiveDate;
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 1, 4).unwrap(),
/// );
/// assert_eq!(range.day_count(), 4);
/// assert_eq!(range.days().count(), 4);
/// assert_eq!(range.window_end().to_string(), "2025-01-04 23:59:59");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the range (inclusive).
    pub start: NaiveDate,
    /// Last day of the range (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range. An inverted range is allowed and selects nothing.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Creates a range covering a single day.
    pub fn single_day(day: NaiveDate) -> Self {
        Self::new(day, day)
    }

    /// Creates the range starting `today` that spans `span_days` days.
    pub fn starting_on(today: NaiveDate, span_days: u32) -> Self {
        let extra = u64::from(span_days.max(1) - 1);
        Self::new(today, today.checked_add_days(Days::new(extra)).unwrap_or(today))
    }

    /// Returns 00:00:00 on the start date.
    pub fn window_start(&self) -> NaiveDateTime {
        self.start.and_time(NaiveTime::default())
    }

    /// Returns 23:59:59 on the end date.
    pub fn window_end(&self) -> NaiveDateTime {
        self.end
            .and_hms_opt(23, 59, 59)
            .expect("23:59:59 is a valid time")
    }

    /// Returns true if the end date is before the start date.
    pub fn is_inverted(&self) -> bool {
        self.end < self.start
    }

    /// Number of calendar days covered, counting both ends.
    ///
    /// Inverted ranges give zero or a negative count.
    pub fn day_count(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Iterates over every day from start to end inclusive.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }

    /// Shortens the range so it spans at most `max_days` days.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::DateRange;
    /// use chrono::NaiveDate;
    ///
    /// let range = DateRange::new(
    ///     NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
    ///     NaiveDate::from_ymd_opt(2025, 1, 14).unwrap(),
    /// );
    /// let clamped = range.clamp_to_span(4);
    /// assert_eq!(clamped.end, NaiveDate::from_ymd_opt(2025, 1, 4).unwrap());
    /// ```
    pub fn clamp_to_span(self, max_days: u32) -> Self {
        let max_days = max_days.max(1);
        if self.day_count() <= i64::from(max_days) {
            return self;
        }
        let end = self
            .start
            .checked_add_days(Days::new(u64::from(max_days - 1)))
            .unwrap_or(self.end);
        Self::new(self.start, end)
    }

    /// Applies an optional span limit.
    pub fn limited_to(self, span_limit: Option<u32>) -> Self {
        match span_limit {
            Some(max_days) => self.clamp_to_span(max_days),
            None => self,
        }
    }

    /// Moves the start date, keeping the range usable.
    ///
    /// If the current end is on or before the new start, the end moves to the
    /// day after the new start. Otherwise the span limit is re-applied.
    pub fn with_start(self, start: NaiveDate, span_limit: Option<u32>) -> Self {
        if self.end <= start {
            let end = start.checked_add_days(Days::new(1)).unwrap_or(start);
            return Self::new(start, end);
        }
        Self::new(start, self.end).limited_to(span_limit)
    }

    /// Moves the end date, re-applying the span limit.
    pub fn with_end(self, end: NaiveDate, span_limit: Option<u32>) -> Self {
        Self::new(self.start, end).limited_to(span_limit)
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

/// Preset ranges starting today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickRange {
    /// Today only.
    Today,
    /// Today and the next three days.
    FourDays,
    /// Seven days starting today.
    OneWeek,
    /// Fourteen days starting today.
    TwoWeeks,
}

impl QuickRange {
    /// All presets, shortest first.
    pub const ALL: [QuickRange; 4] = [
        QuickRange::Today,
        QuickRange::FourDays,
        QuickRange::OneWeek,
        QuickRange::TwoWeeks,
    ];

    /// Days added to today to get the end date.
    pub fn extra_days(self) -> u32 {
        match self {
            QuickRange::Today => 0,
            QuickRange::FourDays => 3,
            QuickRange::OneWeek => 6,
            QuickRange::TwoWeeks => 13,
        }
    }

    /// Resolves the preset against `today`, clamped to the span limit.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::QuickRange;
    /// use chrono::NaiveDate;
    ///
    /// let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
    /// let range = QuickRange::TwoWeeks.resolve(today, Some(4));
    /// assert_eq!(range.day_count(), 4);
    /// ```
    pub fn resolve(self, today: NaiveDate, span_limit: Option<u32>) -> DateRange {
        DateRange::starting_on(today, self.extra_days() + 1).limited_to(span_limit)
    }

    /// Finds the preset that produces exactly this range, if any.
    pub fn detect(range: &DateRange, today: NaiveDate) -> Option<QuickRange> {
        if range.start != today {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|preset| preset.resolve(today, None) == *range)
    }
}
