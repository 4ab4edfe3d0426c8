//! Ledger filters.
//!
//! Pure subsequence filters over a sign-up ledger, used by reporting
//! callers to narrow a ledger before aggregation. All filters preserve the
//! relative order of sessions.

use chrono::NaiveDate;

use crate::models::SessionRecord;
use crate::roster::partition::normalize_id;

/// Default staffing factor for [`understaffed`]: sessions with fewer than
/// half the required TAs signed up are flagged.
pub const DEFAULT_STAFFING_FACTOR: f64 = 0.5;

/// Keeps sessions in which `id` appears anywhere in the raw claimant list,
/// booked or reserve.
///
/// This answers "what is this TA signed up for", independent of whether
/// they ultimately get paid. Matching is case-insensitive and trimmed.
pub fn by_claimant(ledger: &[SessionRecord], id: &str) -> Vec<SessionRecord> {
    let needle = normalize_id(id);
    ledger
        .iter()
        .filter(|session| {
            session
                .cleaned_claimants()
                .iter()
                .any(|c| normalize_id(c) == needle)
        })
        .cloned()
        .collect()
}

/// Keeps sessions whose event type contains `needle` as a substring.
///
/// The match is case-sensitive: sheet event labels are controlled
/// vocabulary, and "Lab" and "lab" are different labels there.
pub fn by_event_type(ledger: &[SessionRecord], needle: &str) -> Vec<SessionRecord> {
    ledger
        .iter()
        .filter(|session| session.event_type.contains(needle))
        .cloned()
        .collect()
}

/// Keeps sessions whose start date is `>= from` (if given) and strictly
/// `< to` (if given). Both bounds are optional and independently
/// applicable.
pub fn by_date(
    ledger: &[SessionRecord],
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Vec<SessionRecord> {
    ledger
        .iter()
        .filter(|session| {
            let date = session.date();
            from.is_none_or(|f| date >= f) && to.is_none_or(|t| date < t)
        })
        .cloned()
        .collect()
}

/// Keeps sessions where fewer than `staffing_factor * required_tas`
/// claimants have signed up.
///
/// Used to chase TAs for sessions at risk of running short-handed.
pub fn understaffed(ledger: &[SessionRecord], staffing_factor: f64) -> Vec<SessionRecord> {
    ledger
        .iter()
        .filter(|session| {
            let signed_up = session.cleaned_claimants().len() as f64;
            signed_up < staffing_factor * f64::from(session.required_tas)
        })
        .cloned()
        .collect()
}
