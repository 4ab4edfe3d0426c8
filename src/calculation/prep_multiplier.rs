//! Preparation-time multiplier lookup.
//!
//! Raw session durations are scaled by a multiplier accounting for unpaid
//! preparation work. Exercise-like events are always doubled; tutoring-like
//! events (labs, seminars, presentations, report-outs) follow the policy's
//! date-ordered epoch table, with a reduced rate for remote sessions; all
//! other event types are unmultiplied.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::PolicyConfig;
use crate::models::{EmploymentKind, SessionRecord};

/// The compensation category an event type falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventCategory {
    /// Exercise-like events, always doubled.
    Exercise,
    /// Tutoring-like events, scaled per the policy epoch in force.
    Tutoring,
    /// Anything else, unmultiplied.
    Other,
}

/// Classifies an event-type label against the policy markers.
///
/// Matching is case-insensitive substring containment. Exercise markers
/// take precedence over tutoring markers.
pub fn classify_event(config: &PolicyConfig, event_type: &str) -> EventCategory {
    let haystack = event_type.to_lowercase();
    let matches = |markers: &[String]| {
        markers
            .iter()
            .any(|marker| haystack.contains(&marker.to_lowercase()))
    };

    if matches(&config.markers().exercise) {
        EventCategory::Exercise
    } else if matches(&config.markers().tutoring) {
        EventCategory::Tutoring
    } else {
        EventCategory::Other
    }
}

/// Returns true if any of the session's room/location strings indicates a
/// remote/online modality.
pub fn is_remote(config: &PolicyConfig, session: &SessionRecord) -> bool {
    session.rooms.iter().any(|room| {
        let haystack = room.to_lowercase();
        config
            .markers()
            .remote
            .iter()
            .any(|marker| haystack.contains(&marker.to_lowercase()))
    })
}

/// Looks up the prep-time multiplier for a session.
///
/// Unknown event types get multiplier 1; there are no error conditions.
/// For tutoring events dated before every epoch in the policy table the
/// multiplier is also 1.
///
/// # Examples
///
/// ```
/// use signup_engine::calculation::prep_multiplier;
/// use signup_engine::config::PolicyConfig;
/// use signup_engine::models::{EmploymentKind, SessionRecord};
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let config = PolicyConfig::default();
/// let session = SessionRecord {
///     event_type: "Laboration".to_string(),
///     start: NaiveDateTime::parse_from_str("2023-03-01 13:00", "%Y-%m-%d %H:%M").unwrap(),
///     end: NaiveDateTime::parse_from_str("2023-03-01 14:30", "%Y-%m-%d %H:%M").unwrap(),
///     rooms: vec!["E35".to_string()],
///     required_tas: 1,
///     claimants: vec![],
/// };
///
/// let factor = prep_multiplier(&config, &session, session.date(), EmploymentKind::Hourly);
/// assert_eq!(factor, Decimal::new(18, 1)); // 1.8
/// ```
pub fn prep_multiplier(
    config: &PolicyConfig,
    session: &SessionRecord,
    date: NaiveDate,
    kind: EmploymentKind,
) -> Decimal {
    match classify_event(config, &session.event_type) {
        EventCategory::Exercise => config.exercise_multiplier(),
        EventCategory::Tutoring => {
            let Some(epoch) = config.tutoring_epoch(date) else {
                return Decimal::ONE;
            };
            let rates = if kind.is_amanuensis() {
                &epoch.amanuensis
            } else {
                &epoch.hourly
            };
            if is_remote(config, session) {
                rates.remote
            } else {
                rates.on_site
            }
        }
        EventCategory::Other => Decimal::ONE,
    }
}
