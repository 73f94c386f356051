//! Error types for the Attendance Engine.
//!
//! The analysis core (grouping, classification, range filtering) is total and
//! never fails. Errors only arise at the edges: loading configuration, loading
//! schedule data, and decoding API requests.

use thiserror::Error;

/// The main error type for the Attendance Engine.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/attendance.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/attendance.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value was present but unusable.
    #[error("Invalid setting '{field}': {message}")]
    InvalidSetting {
        /// The dotted name of the offending setting.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// Schedule data file was not found at the specified path.
    #[error("Schedule file not found: {path}")]
    ScheduleNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Schedule data could not be parsed.
    #[error("Failed to parse schedule data '{path}': {message}")]
    ScheduleParseError {
        /// Where the data came from (file path or "request body").
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A shift timestamp was not valid ISO-8601.
    #[error("Invalid timestamp on shift {shift_id}: '{value}'")]
    InvalidTimestamp {
        /// The ID of the shift carrying the timestamp.
        shift_id: u64,
        /// The raw text that failed to parse.
        value: String,
    },

    /// A shift was rejected by the loader's validation rules.
    #[error("Invalid shift {shift_id}: {message}")]
    InvalidShift {
        /// The ID of the invalid shift.
        shift_id: u64,
        /// A description of what made the shift invalid.
        message: String,
    },

    /// A requested view covers more days than the server allows.
    #[error("Date range {range} spans {days} days; at most {max_days} are allowed")]
    RangeTooLong {
        /// The effective range, as `start..=end`.
        range: String,
        /// Days in the effective range.
        days: i64,
        /// The configured ceiling.
        max_days: u32,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
