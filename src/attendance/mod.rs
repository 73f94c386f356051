//! Attendance analysis for the Attendance Engine.
//!
//! This module contains the analysis functions: grouping planned and actual
//! shifts per employee and location, classifying a planned shift as on time,
//! late, early leave or absent, filtering aggregates to a calendar-day window,
//! picking the shift shown in each day cell, formatting durations and times,
//! and assembling the complete attendance view.
//!
//! Every function here is pure and total: no I/O, no logging, no errors.

mod classification;
mod day_grid;
mod formatting;
mod grouping;
mod range_filter;
mod view;

pub use classification::classify;
pub use day_grid::shift_for_day;
pub use formatting::{format_duration, format_shift_times, format_time};
pub use grouping::group;
pub use range_filter::{filter_by_date_range, filter_by_range};
pub use view::build_view;
