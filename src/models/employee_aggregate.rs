//! Per-employee aggregate of planned and actual shifts.

use serde::Serialize;

use super::ShiftRecord;

/// All shifts of one employee at one location.
///
/// The aggregate borrows its records from the caller's lists. Filtering
/// produces new aggregates that reference a subset of the same records.
///
/// # Example
///
/// ```
/// use attendance_engine::models::EmployeeAggregate;
///
/// let aggregate = EmployeeAggregate::new("Anna", "Store 1", "Cashier");
/// assert!(aggregate.is_empty());
/// assert_eq!(aggregate.key(), ("Anna", "Store 1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeAggregate<'a> {
    /// The employee name.
    pub employee: &'a str,
    /// The location the shifts are worked at.
    pub location: &'a str,
    /// Role taken from the first planned shift seen for this key.
    pub role: &'a str,
    /// Planned shifts in source order.
    pub planned_shifts: Vec<&'a ShiftRecord>,
    /// Actual shifts in source order. Empty unless actual tracking is on.
    pub actual_shifts: Vec<&'a ShiftRecord>,
}

impl<'a> EmployeeAggregate<'a> {
    /// Creates an aggregate with no shifts.
    pub fn new(employee: &'a str, location: &'a str, role: &'a str) -> Self {
        Self {
            employee,
            location,
            role,
            planned_shifts: Vec::new(),
            actual_shifts: Vec::new(),
        }
    }

    /// Returns the grouping key `(employee, location)`.
    pub fn key(&self) -> (&'a str, &'a str) {
        (self.employee, self.location)
    }

    /// Returns true if the aggregate holds neither planned nor actual shifts.
    pub fn is_empty(&self) -> bool {
        self.planned_shifts.is_empty() && self.actual_shifts.is_empty()
    }

    /// Returns a copy with the same identity and the given shift lists.
    pub(crate) fn with_shifts(
        &self,
        planned_shifts: Vec<&'a ShiftRecord>,
        actual_shifts: Vec<&'a ShiftRecord>,
    ) -> Self {
        Self {
            employee: self.employee,
            location: self.location,
            role: self.role,
            planned_shifts,
            actual_shifts,
        }
    }
}
