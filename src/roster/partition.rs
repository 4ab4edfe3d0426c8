//! Booking partition logic.
//!
//! A session's claimant list is already ordered by sign-up priority, so the
//! booked/reserve split is a pure slicing operation: the first
//! `required_tas` cleaned claimants are booked, the rest are reserves.

use serde::{Deserialize, Serialize};

use crate::models::SessionRecord;

/// The booked/reserve split of one session's claimant list.
///
/// Invariants: `booked` and `reserve` are disjoint, order-preserving, and
/// together contain exactly the cleaned claimant list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingPartition {
    /// Claimants within the first `required_tas` positions; these get paid.
    pub booked: Vec<String>,
    /// Claimants beyond the cutoff; unpaid unless promoted.
    pub reserve: Vec<String>,
}

/// Normalizes a claimant identifier for comparison and accumulation:
/// trimmed and case-folded.
pub fn normalize_id(id: &str) -> String {
    id.trim().to_lowercase()
}

/// Splits a session's claimant list into booked and reserve TAs.
///
/// `required_tas` may exceed the number of claimants; the reserve list is
/// then empty and the booked list is the full (short) claimant list. That
/// signals under-staffing, not an error.
///
/// # Examples
///
/// ```
/// use signup_engine::models::SessionRecord;
/// use signup_engine::roster::partition;
/// use chrono::NaiveDateTime;
///
/// let session = SessionRecord {
///     event_type: "Laboration".to_string(),
///     start: NaiveDateTime::parse_from_str("2023-03-01 13:00", "%Y-%m-%d %H:%M").unwrap(),
///     end: NaiveDateTime::parse_from_str("2023-03-01 14:30", "%Y-%m-%d %H:%M").unwrap(),
///     rooms: vec![],
///     required_tas: 1,
///     claimants: vec!["alice".to_string(), "bob".to_string()],
/// };
///
/// let split = partition(&session);
/// assert_eq!(split.booked, vec!["alice"]);
/// assert_eq!(split.reserve, vec!["bob"]);
/// ```
pub fn partition(session: &SessionRecord) -> BookingPartition {
    let claimants = session.cleaned_claimants();
    let cutoff = (session.required_tas as usize).min(claimants.len());

    BookingPartition {
        booked: claimants[..cutoff].iter().map(|c| c.to_string()).collect(),
        reserve: claimants[cutoff..].iter().map(|c| c.to_string()).collect(),
    }
}

/// Returns true if `id` occupies a booked slot in the session.
///
/// Matching is case-insensitive and whitespace-trimmed on both sides.
pub fn is_booked(session: &SessionRecord, id: &str) -> bool {
    let needle = normalize_id(id);
    partition(session)
        .booked
        .iter()
        .any(|c| normalize_id(c) == needle)
}
