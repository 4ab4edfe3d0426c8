//! Employment models.
//!
//! This module defines the EmploymentKind enum and the EmploymentWindow
//! struct produced by the employment-period optimizer.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Represents the kind of employment a TA is compensated under.
///
/// The preparation-time policy differs between the two kinds during the
/// policy transition window, so every paid-time computation takes the kind
/// as input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentKind {
    /// Hourly-paid TA, compensated per timesheet.
    Hourly,
    /// Amanuensis: fixed-term, percentage-of-full-time contract.
    Amanuensis,
}

impl EmploymentKind {
    /// Returns true for the amanuensis contract kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use signup_engine::models::EmploymentKind;
    ///
    /// assert!(EmploymentKind::Amanuensis.is_amanuensis());
    /// assert!(!EmploymentKind::Hourly.is_amanuensis());
    /// ```
    pub fn is_amanuensis(self) -> bool {
        self == EmploymentKind::Amanuensis
    }
}

/// A proposed fixed-term employment window for one TA.
///
/// Produced by the employment-period optimizer; not persisted by the engine.
/// Contract-document generation is an external collaborator's concern.
#[derive(Debug, Clone, PartialEq)]
pub struct EmploymentWindow {
    /// The TA the window is proposed for (trimmed, case-folded id).
    pub ta: String,
    /// First day of the proposed contract.
    pub start: NaiveDate,
    /// Last day of the proposed contract.
    pub end: NaiveDate,
    /// Total paid time for the TA's booked sessions under the amanuensis
    /// policy.
    pub paid: Duration,
    /// The percentage-of-full-time rate implied by `paid` over the window.
    /// This is an unbounded rate, not a capped fraction.
    pub percentage: f64,
}

impl EmploymentWindow {
    /// Returns the window length in whole days.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Returns the paid time in hours.
    pub fn paid_hours(&self) -> f64 {
        self.paid.num_seconds() as f64 / 3600.0
    }
}
