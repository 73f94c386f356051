//! HTTP API module for the Attendance Engine.
//!
//! This module provides the REST endpoints that expose the attendance view
//! to the presentation layer.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AttendanceQuery, AttendanceRequest};
pub use response::{ApiError, ApiErrorResponse, AttendanceResponse};
pub use state::AppState;
