//! Session model.
//!
//! This module defines the SessionRecord struct representing one timetabled
//! session together with its ordered sign-up list.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Represents one timetabled session in a sign-up ledger.
///
/// A session is immutable once constructed; the engine only reads it. The
/// order of `claimants` is significant: sign-up order is priority order, and
/// the first `required_tas` entries are the booked TAs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// The event type label (e.g. "Laboration", "Övning", "Lecture").
    pub event_type: String,
    /// The start instant of the session.
    pub start: NaiveDateTime,
    /// The end instant of the session. Never earlier than `start`.
    pub end: NaiveDateTime,
    /// The rooms (or online locations) the session takes place in.
    #[serde(default)]
    pub rooms: Vec<String>,
    /// How many TAs the session needs. May exceed the number of claimants.
    pub required_tas: u32,
    /// The ordered sign-up list. May contain untrimmed or empty entries as
    /// read from the sheet; use [`SessionRecord::cleaned_claimants`].
    #[serde(default)]
    pub claimants: Vec<String>,
}

impl SessionRecord {
    /// Returns the raw scheduled duration of the session.
    ///
    /// # Examples
    ///
    /// ```
    /// use signup_engine::models::SessionRecord;
    /// use chrono::{Duration, NaiveDateTime};
    ///
    /// let session = SessionRecord {
    ///     event_type: "Laboration".to_string(),
    ///     start: NaiveDateTime::parse_from_str("2023-03-01 13:00", "%Y-%m-%d %H:%M").unwrap(),
    ///     end: NaiveDateTime::parse_from_str("2023-03-01 14:30", "%Y-%m-%d %H:%M").unwrap(),
    ///     rooms: vec!["E35".to_string()],
    ///     required_tas: 1,
    ///     claimants: vec!["alice".to_string(), "bob".to_string()],
    /// };
    /// assert_eq!(session.duration(), Duration::minutes(90));
    /// ```
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Returns the calendar date the session starts on.
    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }

    /// Returns the claimant list with surrounding whitespace trimmed and
    /// entries that are empty after trimming removed, order preserved.
    ///
    /// Sign-up sheets routinely carry blank trailing cells; those must not
    /// occupy booked slots.
    pub fn cleaned_claimants(&self) -> Vec<&str> {
        self.claimants
            .iter()
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    fn make_session(claimants: &[&str]) -> SessionRecord {
        SessionRecord {
            event_type: "Laboration".to_string(),
            start: make_datetime("2023-03-01 13:00"),
            end: make_datetime("2023-03-01 15:00"),
            rooms: vec!["E35".to_string(), "E36".to_string()],
            required_tas: 2,
            claimants: claimants.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// SR-001: duration of a two-hour session
    #[test]
    fn test_duration_two_hours() {
        let session = make_session(&["alice"]);
        assert_eq!(session.duration(), Duration::hours(2));
    }

    /// SR-002: zero-duration session is allowed
    #[test]
    fn test_zero_duration_session() {
        let mut session = make_session(&[]);
        session.end = session.start;
        assert_eq!(session.duration(), Duration::zero());
    }

    /// SR-003: date is taken from the start instant
    #[test]
    fn test_date_from_start() {
        let session = make_session(&[]);
        assert_eq!(
            session.date(),
            NaiveDate::from_ymd_opt(2023, 3, 1).unwrap()
        );
    }

    /// SR-004: cleaned claimants drop blanks and trim whitespace
    #[test]
    fn test_cleaned_claimants_trims_and_drops_empties() {
        let session = make_session(&[" alice ", "", "bob", "   "]);
        assert_eq!(session.cleaned_claimants(), vec!["alice", "bob"]);
    }

    /// SR-005: cleaning preserves sign-up order
    #[test]
    fn test_cleaned_claimants_preserves_order() {
        let session = make_session(&["carol", "alice", "bob"]);
        assert_eq!(session.cleaned_claimants(), vec!["carol", "alice", "bob"]);
    }

    #[test]
    fn test_session_serialization_round_trip() {
        let session = make_session(&["alice", "bob"]);
        let json = serde_json::to_string(&session).unwrap();
        let deserialized: SessionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(session, deserialized);
    }

    #[test]
    fn test_session_deserialization_defaults() {
        let json = r#"{
            "event_type": "Lecture",
            "start": "2023-03-01T10:00:00",
            "end": "2023-03-01T12:00:00",
            "required_tas": 0
        }"#;

        let session: SessionRecord = serde_json::from_str(json).unwrap();
        assert!(session.rooms.is_empty());
        assert!(session.claimants.is_empty());
    }
}
