//! Application state for the Attendance Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::models::ScheduleData;

/// Shared application state.
///
/// Holds the loaded configuration and the schedule loaded at startup. Both
/// are read-only; every request recomputes its view from them.
#[derive(Clone)]
pub struct AppState {
    /// The loaded attendance configuration.
    config: Arc<ConfigLoader>,
    /// The pre-loaded planned and actual shifts.
    schedule: Arc<ScheduleData>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(config: ConfigLoader, schedule: ScheduleData) -> Self {
        Self {
            config: Arc::new(config),
            schedule: Arc::new(schedule),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the pre-loaded schedule.
    pub fn schedule(&self) -> &ScheduleData {
        &self.schedule
    }
}
