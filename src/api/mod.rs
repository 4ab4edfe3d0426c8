//! HTTP API module for the Teaching-Time Accounting Engine.
//!
//! This module provides the REST API endpoints for time reports and
//! employment-period proposals over a sign-up ledger.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{PeriodsRequest, ReportFilters, ReportRequest, SessionRequest};
pub use response::{ApiError, PeriodsResponse, ReportResponse, WindowResponse};
pub use state::AppState;
