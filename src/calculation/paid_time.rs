//! Paid-time computation for a single session.
//!
//! Paid time is the raw session duration rounded up to a quarter hour,
//! scaled by the prep-time multiplier, and rounded up again. The
//! intermediate scaling is done in exact decimal arithmetic so that a
//! product landing precisely on a quarter-hour boundary stays there.

use chrono::Duration;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::config::PolicyConfig;
use crate::models::{EmploymentKind, SessionRecord};

use super::prep_multiplier::prep_multiplier;
use super::rounding::round_up_quarter_hour;

/// Computes the paid duration for one session.
///
/// Algorithm: round the raw duration up to a quarter hour, apply the
/// prep-time multiplier for the session's event type, date, modality and
/// the given employment kind, then round the result up again.
///
/// # Examples
///
/// A 90-minute lab on 2023-03-01 scales by 1.8 to 162 minutes, which
/// rounds up to 165 (2 h 45 min).
///
/// ```
/// use signup_engine::calculation::paid_time;
/// use signup_engine::config::PolicyConfig;
/// use signup_engine::models::{EmploymentKind, SessionRecord};
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
///
/// let config = PolicyConfig::default();
/// assert_eq!(
///     paid_time(&session, &config, EmploymentKind::Hourly),
///     Duration::minutes(165)
/// );
/// ```
pub fn paid_time(
    session: &SessionRecord,
    config: &PolicyConfig,
    kind: EmploymentKind,
) -> Duration {
    let raw = round_up_quarter_hour(session.duration());
    let factor = prep_multiplier(config, session, session.date(), kind);

    let scaled_seconds = (Decimal::from(raw.num_seconds()) * factor).ceil();
    let scaled = Duration::seconds(
        scaled_seconds
            .to_i64()
            .unwrap_or_else(|| raw.num_seconds()),
    );

    round_up_quarter_hour(scaled)
}

/// Computes the scheduled (unmultiplied) duration for one session: the raw
/// duration rounded up to a quarter hour.
///
/// This is the per-type and per-student-load view of time, distinct from
/// the paid-time view.
pub fn scheduled_time(session: &SessionRecord) -> Duration {
    round_up_quarter_hour(session.duration())
}
