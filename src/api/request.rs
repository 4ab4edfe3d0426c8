//! Request types for the Teaching-Time Accounting Engine API.
//!
//! This module defines the JSON request structures for the `/report` and
//! `/periods` endpoints.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::calculation::PeriodOptions;
use crate::models::{EmploymentKind, SessionRecord};

/// Request body for the `/report` endpoint.
///
/// Contains a sign-up ledger, optional filters to narrow it, and the
/// employment kind the paid-time aggregates should be computed under.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    /// The sign-up ledger to report over.
    pub sessions: Vec<SessionRequest>,
    /// Optional filters applied before aggregation.
    #[serde(default)]
    pub filters: ReportFilters,
    /// The employment kind for paid-time computation.
    #[serde(default = "default_employment_kind")]
    pub employment_kind: EmploymentKind,
}

fn default_employment_kind() -> EmploymentKind {
    EmploymentKind::Hourly
}

/// One session of a sign-up ledger in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRequest {
    /// The event-type label, as written in the sign-up sheet.
    pub event_type: String,
    /// The scheduled start of the session.
    pub start: NaiveDateTime,
    /// The scheduled end of the session.
    pub end: NaiveDateTime,
    /// Room or location strings for the session.
    #[serde(default)]
    pub rooms: Vec<String>,
    /// How many TAs the session needs.
    pub required_tas: u32,
    /// TA sign-ups, in sign-up order.
    #[serde(default)]
    pub claimants: Vec<String>,
}

/// Optional ledger filters in a report request.
///
/// Filters compose: each one given narrows the ledger further.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportFilters {
    /// Keep sessions this TA is signed up for (booked or reserve).
    #[serde(default)]
    pub ta: Option<String>,
    /// Keep sessions whose event type contains this substring.
    #[serde(default)]
    pub event_type: Option<String>,
    /// Keep sessions starting on or after this date.
    #[serde(default)]
    pub from: Option<NaiveDate>,
    /// Keep sessions starting strictly before this date.
    #[serde(default)]
    pub to: Option<NaiveDate>,
}

impl ReportFilters {
    /// Returns true if no filter is set.
    pub fn is_empty(&self) -> bool {
        self.ta.is_none() && self.event_type.is_none() && self.from.is_none() && self.to.is_none()
    }
}

/// Request body for the `/periods` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodsRequest {
    /// The sign-up ledger to propose employment windows from.
    pub sessions: Vec<SessionRequest>,
    /// Overrides the percentage-of-full-time floor.
    #[serde(default)]
    pub low_percentage: Option<f64>,
    /// Overrides the minimum booked span, in days.
    #[serde(default)]
    pub min_days: Option<i64>,
    /// Fixes the window start for every TA.
    #[serde(default)]
    pub forced_start: Option<NaiveDate>,
    /// Fixes the window end for every TA.
    #[serde(default)]
    pub forced_end: Option<NaiveDate>,
}

impl From<SessionRequest> for SessionRecord {
    fn from(req: SessionRequest) -> Self {
        SessionRecord {
            event_type: req.event_type,
            start: req.start,
            end: req.end,
            rooms: req.rooms,
            required_tas: req.required_tas,
            claimants: req.claimants,
        }
    }
}

impl PeriodsRequest {
    /// Builds the search options, falling back to the defaults for any
    /// threshold the request leaves out.
    pub fn options(&self) -> PeriodOptions {
        let defaults = PeriodOptions::default();
        PeriodOptions {
            low_percentage: self.low_percentage.unwrap_or(defaults.low_percentage),
            min_days: self.min_days.unwrap_or(defaults.min_days),
            forced_start: self.forced_start,
            forced_end: self.forced_end,
        }
    }
}
