//! HTTP request handlers for the Attendance Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::NaiveDate;
use tracing::{info, warn};
use uuid::Uuid;

use crate::attendance::build_view;
use crate::config::ConfigLoader;
use crate::data::ScheduleLoader;
use crate::models::{DateRange, OperatingMode, QuickRange, ScheduleData};

use super::request::{AttendanceQuery, AttendanceRequest};
use super::response::{ApiError, ApiErrorResponse, AttendanceResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/attendance",
            get(attendance_handler).post(submit_attendance_handler),
        )
        .with_state(state)
}

/// Handler for GET /attendance.
///
/// Builds the attendance view over the schedule loaded at startup.
async fn attendance_handler(
    State(state): State<AppState>,
    query: Result<Query<AttendanceQuery>, QueryRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing attendance query");

    // Handle query string parsing errors
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            let body_text = rejection.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "Invalid query string"
            );
            return ApiErrorResponse::bad_request(ApiError::validation_error(body_text))
                .into_response();
        }
    };

    // Resolve mode and range against today in the reporting timezone
    let config = state.config();
    let today = config.today();
    let mode = query.mode_or_default(config);
    let range = query.resolve_range(config, mode, today);

    respond_with_view(
        correlation_id,
        state.schedule(),
        range,
        mode,
        config,
        today,
    )
}

/// Handler for POST /attendance.
///
/// Builds the attendance view over the records submitted in the body.
async fn submit_attendance_handler(
    State(state): State<AppState>,
    payload: Result<Json<AttendanceRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing attendance request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Missing fields are validation errors
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    let config = state.config();
    let (raw, range, mode) = request.into_parts();
    let mode = mode.unwrap_or_else(|| config.default_mode());

    // Parse timestamps into the reporting timezone
    let schedule = match ScheduleLoader::from_raw(raw, config) {
        Ok(schedule) => schedule,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Rejected submitted schedule"
            );
            let api_error: ApiErrorResponse = err.into();
            return api_error.into_response();
        }
    };

    respond_with_view(
        correlation_id,
        &schedule,
        range,
        mode,
        config,
        config.today(),
    )
}

/// Computes the view and serializes it into the response.
///
/// Ranges longer than `range.max_view_days` are refused before any cell is
/// built.
fn respond_with_view(
    correlation_id: Uuid,
    schedule: &ScheduleData,
    range: DateRange,
    mode: OperatingMode,
    config: &ConfigLoader,
    today: NaiveDate,
) -> Response {
    // Apply the span limit and the view ceiling
    let range = match config.view_range(range, mode) {
        Ok(range) => range,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Requested range too long"
            );
            let api_error: ApiErrorResponse = err.into();
            return api_error.into_response();
        }
    };

    // Build the view and time it
    let start_time = Instant::now();
    let view = build_view(schedule, range, mode, config.config());
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        mode = %mode,
        range = %view.range,
        rows = view.rows.len(),
        duration_us = duration.as_micros(),
        "Attendance view computed"
    );

    let response = AttendanceResponse {
        request_id: correlation_id,
        quick_range: QuickRange::detect(&view.range, today),
        view,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}
