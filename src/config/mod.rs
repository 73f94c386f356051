//! Configuration loading and management for the Attendance Engine.
//!
//! This module loads the attendance settings (default mode, reporting
//! timezone, basic-mode span limit, display suffixes) from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Basic mode span limit: {} days", config.config().range.basic_mode_max_days);
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader};
pub use types::{AttendanceConfig, DisplaySettings, EngineSettings, RangeSettings};
