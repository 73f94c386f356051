//! Core data models for the Attendance Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance_view;
mod date_range;
mod employee_aggregate;
mod operating_mode;
mod shift_assessment;
mod shift_record;

pub use attendance_view::{AttendanceRow, AttendanceView, DayCell};
pub use date_range::{DateRange, QuickRange};
pub use employee_aggregate::EmployeeAggregate;
pub use operating_mode::OperatingMode;
pub use shift_assessment::{ShiftAssessment, ShiftStatus};
pub use shift_record::{ScheduleData, ShiftRecord};
