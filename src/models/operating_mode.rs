//! Operating mode of the attendance view.

use serde::{Deserialize, Serialize};

/// Selects how much of the attendance picture is computed.
///
/// The mode is only a convenient way to derive the flags the analysis
/// functions take. Both flags switch together.
///
/// # Example
///
/// ```
/// use attendance_engine::models::OperatingMode;
///
/// let mode = OperatingMode::Advanced;
/// assert!(mode.track_actual());
/// assert!(mode.absence_tracking());
/// assert_eq!(mode.span_limit(4), None);
/// assert_eq!(OperatingMode::Basic.span_limit(4), Some(4));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatingMode {
    /// Planned shifts only, date range span is limited.
    #[default]
    Basic,
    /// Planned and actual shifts, lateness and absences, no span limit.
    Advanced,
}

impl OperatingMode {
    /// Whether actual shifts are grouped in alongside planned ones.
    pub fn track_actual(self) -> bool {
        self == OperatingMode::Advanced
    }

    /// Whether a planned shift without an actual counterpart is an absence.
    pub fn absence_tracking(self) -> bool {
        self == OperatingMode::Advanced
    }

    /// The maximum number of days a date range may span in this mode.
    pub fn span_limit(self, basic_mode_max_days: u32) -> Option<u32> {
        match self {
            OperatingMode::Basic => Some(basic_mode_max_days),
            OperatingMode::Advanced => None,
        }
    }
}

impl std::fmt::Display for OperatingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperatingMode::Basic => write!(f, "basic"),
            OperatingMode::Advanced => write!(f, "advanced"),
        }
    }
}
