//! Grouping of flat shift lists into per-employee aggregates.

use std::collections::HashMap;

use crate::models::{EmployeeAggregate, ShiftRecord};

/// Groups planned and actual shifts by `(employee, location)`.
///
/// Planned shifts are visited in order. The first planned shift with a given
/// key creates the aggregate and fixes its role; every planned shift is then
/// appended to its aggregate.
///
/// When `track_actual` is true, actual shifts are appended to the aggregate
/// with the same key. Actual shifts whose key never appeared among the planned
/// shifts are dropped. When `track_actual` is false, `actual` is ignored and
/// every aggregate keeps an empty `actual_shifts`.
///
/// # Returns
///
/// One aggregate per distinct key, in the order keys first appear in
/// `planned`.
///
/// # Example
///
/// ```
/// use attendance_engine::attendance::group;
/// use attendance_engine::models::ShiftRecord;
/// use chrono::NaiveDateTime;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
/// let shift = |id, employee: &str, start, end| ShiftRecord {
///     id,
///     employee: employee.to_string(),
///     location: "X".to_string(),
///     role: "Clerk".to_string(),
///     start_time: at(start),
///     end_time: at(end),
/// };
///
/// let planned = vec![
///     shift(1, "A", "2025-01-01 09:00", "2025-01-01 17:00"),
///     shift(2, "B", "2025-01-01 09:00", "2025-01-01 17:00"),
///     shift(3, "A", "2025-01-02 09:00", "2025-01-02 17:00"),
/// ];
/// let actual = vec![shift(10, "C", "2025-01-01 09:00", "2025-01-01 17:00")];
///
/// let groups = group(&planned, &actual, true);
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].employee, "A");
/// assert_eq!(groups[0].planned_shifts.len(), 2);
/// assert!(groups.iter().all(|g| g.actual_shifts.is_empty()));
/// ```
pub fn group<'a>(
    planned: &'a [ShiftRecord],
    actual: &'a [ShiftRecord],
    track_actual: bool,
) -> Vec<EmployeeAggregate<'a>> {
    let mut aggregates: Vec<EmployeeAggregate<'a>> = Vec::new();
    let mut index: HashMap<(&'a str, &'a str), usize> = HashMap::new();

    for shift in planned {
        let key = (shift.employee.as_str(), shift.location.as_str());
        let slot = *index.entry(key).or_insert_with(|| {
            aggregates.push(EmployeeAggregate::new(key.0, key.1, &shift.role));
            aggregates.len() - 1
        });
        aggregates[slot].planned_shifts.push(shift);
    }

    if track_actual {
        for shift in actual {
            let key = (shift.employee.as_str(), shift.location.as_str());
            if let Some(&slot) = index.get(&key) {
                aggregates[slot].actual_shifts.push(shift);
            }
        }
    }

    aggregates
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn make_datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    fn make_shift(id: u64, employee: &str, location: &str, role: &str) -> ShiftRecord {
        ShiftRecord {
            id,
            employee: employee.to_string(),
            location: location.to_string(),
            role: role.to_string(),
            start_time: make_datetime("2025-01-01 09:00"),
            end_time: make_datetime("2025-01-01 17:00"),
        }
    }

    #[test]
    fn test_one_aggregate_per_key_in_first_appearance_order() {
        let planned = vec![
            make_shift(1, "B", "X", "Clerk"),
            make_shift(2, "A", "X", "Clerk"),
            make_shift(3, "B", "X", "Clerk"),
            make_shift(4, "A", "Y", "Clerk"),
        ];

        let groups = group(&planned, &[], false);

        let keys: Vec<(&str, &str)> = groups.iter().map(|g| g.key()).collect();
        assert_eq!(keys, vec![("B", "X"), ("A", "X"), ("A", "Y")]);
        assert_eq!(
            groups[0].planned_shifts.iter().map(|s| s.id).collect::<Vec<_>>(),
            vec![1, 3]
        );
    }

    #[test]
    fn test_role_comes_from_first_planned_shift() {
        let planned = vec![
            make_shift(1, "A", "X", "Clerk"),
            make_shift(2, "A", "X", "Manager"),
        ];

        let groups = group(&planned, &[], false);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].role, "Clerk");
    }

    #[test]
    fn test_actual_ignored_when_not_tracking() {
        let planned = vec![make_shift(1, "A", "X", "Clerk")];
        let actual = vec![make_shift(10, "A", "X", "Clerk")];

        let groups = group(&planned, &actual, false);

        assert_eq!(groups.len(), 1);
        assert!(groups[0].actual_shifts.is_empty());
    }

    #[test]
    fn test_actual_appended_when_tracking() {
        let planned = vec![make_shift(1, "A", "X", "Clerk"), make_shift(2, "B", "X", "Clerk")];
        let actual = vec![
            make_shift(10, "B", "X", "Clerk"),
            make_shift(11, "A", "X", "Clerk"),
            make_shift(12, "B", "X", "Clerk"),
        ];

        let groups = group(&planned, &actual, true);

        assert_eq!(
            groups[0].actual_shifts.iter().map(|s| s.id).collect::<Vec<_>>(),
            vec![11]
        );
        assert_eq!(
            groups[1].actual_shifts.iter().map(|s| s.id).collect::<Vec<_>>(),
            vec![10, 12]
        );
    }

    #[test]
    fn test_unplanned_actual_shifts_are_dropped() {
        let planned = vec![make_shift(1, "A", "X", "Clerk")];
        let actual = vec![
            make_shift(10, "A", "Y", "Clerk"),
            make_shift(11, "Z", "X", "Clerk"),
        ];

        let groups = group(&planned, &actual, true);

        assert_eq!(groups.len(), 1);
        assert!(groups[0].actual_shifts.is_empty());
    }

    #[test]
    fn test_empty_input_gives_empty_output() {
        let actual = vec![make_shift(10, "A", "X", "Clerk")];
        assert!(group(&[], &actual, true).is_empty());
    }
}
