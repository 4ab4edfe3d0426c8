//! HTTP request handlers for the Teaching-Time Accounting Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::collections::{BTreeMap, HashMap};
use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    compute_employment_periods, hours_per_event_type, hours_per_student, hours_per_ta, max_hours,
    total_hours,
};
use crate::config::PolicyConfig;
use crate::ledger::parse_sheet;
use crate::models::{EmploymentKind, SessionRecord};
use crate::roster::{by_claimant, by_date, by_event_type};

use super::request::{PeriodsRequest, ReportFilters, ReportRequest, SessionRequest};
use super::response::{
    duration_as_hours, ApiError, ApiErrorResponse, PeriodsResponse, ReportResponse, WindowResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/report", post(report_handler))
        .route("/report/sheet", post(sheet_report_handler))
        .route("/periods", post(periods_handler))
        .with_state(state)
}

/// Handler for POST /report endpoint.
///
/// Accepts a sign-up ledger plus optional filters and returns the full set
/// of time aggregates.
async fn report_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing report request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_error(correlation_id, rejection)),
    };

    if let Some(error) = validate_sessions(&request.sessions) {
        warn!(correlation_id = %correlation_id, error = %error.message, "Invalid session data");
        return bad_request(error);
    }

    let ledger: Vec<SessionRecord> = request.sessions.into_iter().map(Into::into).collect();
    let ledger = apply_filters(ledger, &request.filters);

    let start_time = Instant::now();
    let response = build_report(&ledger, state.policy().config(), request.employment_kind);

    info!(
        correlation_id = %correlation_id,
        session_count = ledger.len(),
        ta_count = response.hours_per_ta.len(),
        total_hours = %response.total_hours,
        duration_us = start_time.elapsed().as_micros(),
        "Report completed successfully"
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Handler for POST /report/sheet endpoint.
///
/// Accepts a raw CSV sign-up sheet as the request body and returns the
/// same aggregates as `/report`, computed under the hourly policy. Sheet
/// parsing failures come back as row-level errors with their line number.
async fn sheet_report_handler(State(state): State<AppState>, body: String) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing sheet report request");

    let ledger = match parse_sheet(body.as_bytes()) {
        Ok(ledger) => ledger,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Sheet parsing failed");
            let api_error: ApiErrorResponse = err.into();
            return api_error.into_response();
        }
    };

    let start_time = Instant::now();
    let response = build_report(&ledger, state.policy().config(), EmploymentKind::Hourly);

    info!(
        correlation_id = %correlation_id,
        session_count = ledger.len(),
        ta_count = response.hours_per_ta.len(),
        total_hours = %response.total_hours,
        duration_us = start_time.elapsed().as_micros(),
        "Sheet report completed successfully"
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Handler for POST /periods endpoint.
///
/// Accepts a sign-up ledger and returns a proposed employment window per
/// eligible TA.
async fn periods_handler(
    State(state): State<AppState>,
    payload: Result<Json<PeriodsRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing periods request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_error(correlation_id, rejection)),
    };

    if let Some(error) = validate_sessions(&request.sessions) {
        warn!(correlation_id = %correlation_id, error = %error.message, "Invalid session data");
        return bad_request(error);
    }

    let options = request.options();
    let ledger: Vec<SessionRecord> = request.sessions.into_iter().map(Into::into).collect();

    let start_time = Instant::now();
    let periods = compute_employment_periods(&ledger, state.policy().config(), &options);

    let mut windows: Vec<WindowResponse> = periods.into_values().map(Into::into).collect();
    windows.sort_by(|a, b| a.ta.cmp(&b.ta));

    info!(
        correlation_id = %correlation_id,
        session_count = ledger.len(),
        window_count = windows.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Periods search completed successfully"
    );
    let response = PeriodsResponse {
        report_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        windows,
    };
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Converts a JSON extraction rejection into an API error, logging it
/// under the request's correlation id.
fn rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
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
    }
}

fn bad_request(error: ApiError) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Rejects sessions that end before they start. The CSV reader enforces
/// this on file ingestion; JSON requests get the same check here.
fn validate_sessions(sessions: &[SessionRequest]) -> Option<ApiError> {
    sessions.iter().enumerate().find_map(|(index, session)| {
        (session.start > session.end).then(|| {
            ApiError::validation_error(format!(
                "session {} ends before it starts ({} > {})",
                index, session.start, session.end
            ))
        })
    })
}

fn apply_filters(ledger: Vec<SessionRecord>, filters: &ReportFilters) -> Vec<SessionRecord> {
    let mut ledger = ledger;
    if let Some(ta) = &filters.ta {
        ledger = by_claimant(&ledger, ta);
    }
    if let Some(event_type) = &filters.event_type {
        ledger = by_event_type(&ledger, event_type);
    }
    if filters.from.is_some() || filters.to.is_some() {
        ledger = by_date(&ledger, filters.from, filters.to);
    }
    ledger
}

/// Computes all five aggregates over a (filtered) ledger.
fn build_report(
    ledger: &[SessionRecord],
    config: &PolicyConfig,
    kind: EmploymentKind,
) -> ReportResponse {
    let to_hours = |map: HashMap<String, Duration>| -> BTreeMap<String, Decimal> {
        map.into_iter()
            .map(|(key, value)| (key, duration_as_hours(value)))
            .collect()
    };

    ReportResponse {
        report_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employment_kind: kind,
        session_count: ledger.len(),
        hours_per_ta: to_hours(hours_per_ta(ledger, config, kind)),
        hours_per_event_type: to_hours(hours_per_event_type(ledger)),
        hours_per_student: to_hours(hours_per_student(ledger)),
        total_hours: duration_as_hours(total_hours(ledger, config, kind)),
        max_hours: duration_as_hours(max_hours(ledger, config, kind)),
    }
}
