//! Employment-period search.
//!
//! For each TA booked anywhere in a ledger, this module searches a small
//! lattice of candidate contract windows, from widest to narrowest, and
//! proposes the first one whose implied percentage-of-full-time meets the
//! threshold. Wider windows are preferred: one semester-wide contract
//! replaces months of timesheets. TAs with too little booked work are
//! omitted from the result, which callers must read as "ineligible", not
//! "error".

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate};

use crate::config::PolicyConfig;
use crate::models::{EmploymentKind, EmploymentWindow, SessionRecord};
use crate::roster::{normalize_id, partition};

use super::paid_time::paid_time;

/// Nominal full-time annual working hours.
pub const FULL_TIME_ANNUAL_HOURS: f64 = 1600.0;

/// Nominal year length in days.
pub const NOMINAL_YEAR_DAYS: f64 = 365.0;

/// Default percentage-of-full-time floor below which no window is proposed.
pub const DEFAULT_LOW_PERCENTAGE: f64 = 0.05;

/// Default minimum booked span, in days, to justify a fixed-term contract.
pub const DEFAULT_MIN_DAYS: i64 = 25;

/// Options for the employment-period search.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodOptions {
    /// The percentage-of-full-time floor a candidate window must reach.
    pub low_percentage: f64,
    /// The minimum booked span, in days; TAs below it are ineligible.
    pub min_days: i64,
    /// Fixes the window start across all candidates.
    pub forced_start: Option<NaiveDate>,
    /// Fixes the window end across all candidates.
    pub forced_end: Option<NaiveDate>,
}

impl Default for PeriodOptions {
    fn default() -> Self {
        Self {
            low_percentage: DEFAULT_LOW_PERCENTAGE,
            min_days: DEFAULT_MIN_DAYS,
            forced_start: None,
            forced_end: None,
        }
    }
}

/// Computes the percentage-of-full-time rate for `hours` of paid work over
/// the window `start..end`.
///
/// This is an unbounded rate, not a capped fraction: short, intense
/// periods can exceed 1.0. Statutory ceilings are a caller concern.
///
/// # Examples
///
/// ```
/// use signup_engine::calculation::compute_percentage;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
/// let pct = compute_percentage(start, end, 800.0);
/// assert!((pct - 0.5014).abs() < 0.001); // half-time over (almost) a year
/// ```
pub fn compute_percentage(start: NaiveDate, end: NaiveDate, hours: f64) -> f64 {
    let days = (end - start).num_days().max(1) as f64;
    (hours / FULL_TIME_ANNUAL_HOURS) * (NOMINAL_YEAR_DAYS / days)
}

/// Searches for the widest acceptable employment window per TA.
///
/// For every TA appearing as a booked claimant, paid time is computed with
/// the amanuensis policy and candidate windows are tried from widest
/// (semester-aligned) to narrowest (exact booked span), accepting the
/// first whose percentage reaches `options.low_percentage`. TAs whose
/// booked span is shorter than `options.min_days`, or for which no
/// candidate passes, are omitted.
pub fn compute_employment_periods(
    ledger: &[SessionRecord],
    config: &PolicyConfig,
    options: &PeriodOptions,
) -> HashMap<String, EmploymentWindow> {
    let mut booked_sessions: HashMap<String, Vec<&SessionRecord>> = HashMap::new();

    for session in ledger {
        for ta in partition(session).booked {
            booked_sessions
                .entry(normalize_id(&ta))
                .or_default()
                .push(session);
        }
    }

    let mut windows = HashMap::new();
    for (ta, sessions) in booked_sessions {
        if let Some(window) = propose_window(&ta, &sessions, config, options) {
            windows.insert(ta, window);
        }
    }

    windows
}

/// Proposes a window for one TA, or `None` if the TA is ineligible.
fn propose_window(
    ta: &str,
    sessions: &[&SessionRecord],
    config: &PolicyConfig,
    options: &PeriodOptions,
) -> Option<EmploymentWindow> {
    let earliest = sessions.iter().map(|s| s.date()).min()?;
    let latest = sessions.iter().map(|s| s.end.date()).max()?;

    // Duration floor first: however favourable a wide window's percentage,
    // a booked span this short does not justify a fixed-term contract.
    if (latest - earliest).num_days() < options.min_days {
        return None;
    }

    let paid = sessions.iter().fold(Duration::zero(), |acc, session| {
        acc + paid_time(session, config, EmploymentKind::Amanuensis)
    });
    let hours = paid.num_seconds() as f64 / 3600.0;

    for (start, end) in candidate_bounds(earliest, latest) {
        let start = options.forced_start.unwrap_or(start);
        let end = options.forced_end.unwrap_or(end);
        let percentage = compute_percentage(start, end, hours);

        if percentage >= options.low_percentage {
            return Some(EmploymentWindow {
                ta: ta.to_string(),
                start,
                end,
                paid,
                percentage,
            });
        }
    }

    None
}

/// Candidate windows from widest to narrowest: semester-aligned,
/// month-rounded, the two mixed pairs, exact booked span.
fn candidate_bounds(earliest: NaiveDate, latest: NaiveDate) -> [(NaiveDate, NaiveDate); 5] {
    let (semester_start, semester_end) = semester_bounds(earliest, latest);
    [
        (semester_start, semester_end),
        (month_floor(earliest), month_ceil(latest)),
        (earliest, month_ceil(latest)),
        (month_floor(earliest), latest),
        (earliest, latest),
    ]
}

/// Snaps to the calendar half-year containing `earliest`: spring is
/// Jan 1–Jun 30, autumn is Aug 1–Jan 31 of the next year. If `latest`
/// exceeds the semester, the end extends to month-rounded `latest`.
fn semester_bounds(earliest: NaiveDate, latest: NaiveDate) -> (NaiveDate, NaiveDate) {
    let year = earliest.year();
    let (start, end) = if earliest.month() <= 6 {
        (ymd(year, 1, 1), ymd(year, 6, 30))
    } else {
        (ymd(year, 8, 1), ymd(year + 1, 1, 31))
    };

    let end = if latest > end { month_ceil(latest) } else { end };

    (start, end)
}

/// The first day of the date's month.
fn month_floor(date: NaiveDate) -> NaiveDate {
    ymd(date.year(), date.month(), 1)
}

/// The last day of the date's month.
fn month_ceil(date: NaiveDate) -> NaiveDate {
    let first_of_next = if date.month() == 12 {
        ymd(date.year() + 1, 1, 1)
    } else {
        ymd(date.year(), date.month() + 1, 1)
    };
    first_of_next - Duration::days(1)
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
