//! Response types for the Teaching-Time Accounting Engine API.
//!
//! This module defines the report/period response structures, the error
//! response structures, and the error mapping for the HTTP API. Durations
//! leave the API as decimal hours: quarter-hour amounts are exact in
//! decimal, and payroll consumers work in hours, not seconds.

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{EmploymentKind, EmploymentWindow};

/// Converts a duration to decimal hours.
///
/// Exact for anything the engine produces: quarter-hour durations divide
/// 3600 cleanly.
pub(super) fn duration_as_hours(duration: Duration) -> Decimal {
    Decimal::from(duration.num_seconds()) / Decimal::from(3600)
}

/// Response body for the `/report` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportResponse {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was produced.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that produced the report.
    pub engine_version: String,
    /// The employment kind the paid-time aggregates were computed under.
    pub employment_kind: EmploymentKind,
    /// How many sessions remained after filtering.
    pub session_count: usize,
    /// Paid hours per booked TA.
    pub hours_per_ta: BTreeMap<String, Decimal>,
    /// Scheduled hours per event type.
    pub hours_per_event_type: BTreeMap<String, Decimal>,
    /// Scheduled student load per event type.
    pub hours_per_student: BTreeMap<String, Decimal>,
    /// Total paid hours across all booked TAs.
    pub total_hours: Decimal,
    /// Paid hours if every required slot were filled.
    pub max_hours: Decimal,
}

/// Response body for the `/periods` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodsResponse {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was produced.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that produced the report.
    pub engine_version: String,
    /// Proposed windows, sorted by TA id. TAs with too little booked work
    /// are absent, not errored.
    pub windows: Vec<WindowResponse>,
}

/// One proposed employment window in a periods response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowResponse {
    /// The TA the window is proposed for.
    pub ta: String,
    /// First day of the proposed contract.
    pub start: NaiveDate,
    /// Last day of the proposed contract.
    pub end: NaiveDate,
    /// Total paid hours under the amanuensis policy.
    pub paid_hours: Decimal,
    /// The percentage-of-full-time rate over the window.
    pub percentage: f64,
}

impl From<EmploymentWindow> for WindowResponse {
    fn from(window: EmploymentWindow) -> Self {
        WindowResponse {
            ta: window.ta,
            start: window.start,
            end: window.end,
            paid_hours: duration_as_hours(window.paid),
            percentage: window.percentage,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::MissingColumn { column } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "MISSING_COLUMN",
                    format!("Sign-up sheet is missing required column: {}", column),
                    "The sheet header does not match the expected column contract",
                ),
            },
            EngineError::InvalidRow { line, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_ROW",
                    format!("Invalid sign-up sheet row {}: {}", line, message),
                    "The sheet row contains unparseable data",
                ),
            },
            EngineError::SheetReadError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "SHEET_READ_ERROR",
                    "Failed to read sign-up sheet",
                    message,
                ),
            },
        }
    }
}
