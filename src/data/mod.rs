//! Schedule data loading for the Attendance Engine.
//!
//! The record set is loaded once, before any analysis runs. Loading is where
//! malformed timestamps are caught; everything downstream works on parsed,
//! timezone-normalized [`ShiftRecord`](crate::models::ShiftRecord)s.

mod loader;

pub use loader::{RawScheduleData, RawShiftRecord, ScheduleLoader, parse_timestamp};
