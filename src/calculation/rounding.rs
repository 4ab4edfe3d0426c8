//! Quarter-hour rounding.
//!
//! All compensated time is booked in quarter-hour steps: durations snap up
//! to the next boundary at 0, 15, 30 or 45 minutes past the hour, and a
//! duration already on a boundary stays unchanged. Rounding is applied to
//! the raw session duration before the prep-time multiplier and again to
//! the multiplied result.

use chrono::Duration;

/// The rounding step, in minutes.
pub const QUARTER_HOUR_MINUTES: i64 = 15;

/// Rounds a duration up to the next quarter-hour boundary.
///
/// A duration exactly on a boundary is returned unchanged. Any remainder,
/// however small, snaps to the next boundary: 46 minutes becomes an hour,
/// 31 becomes 45, 16 becomes 30, one second becomes 15 minutes.
///
/// This function is idempotent and monotonic; both properties are relied
/// on by the aggregation layer and covered by property tests.
///
/// # Examples
///
/// ```
/// use signup_engine::calculation::round_up_quarter_hour;
/// use chrono::Duration;
///
/// assert_eq!(round_up_quarter_hour(Duration::minutes(90)), Duration::minutes(90));
/// assert_eq!(round_up_quarter_hour(Duration::minutes(91)), Duration::minutes(105));
/// assert_eq!(round_up_quarter_hour(Duration::minutes(162)), Duration::minutes(165));
/// ```
pub fn round_up_quarter_hour(duration: Duration) -> Duration {
    let step = QUARTER_HOUR_MINUTES * 60;
    let secs = duration.num_seconds().max(0);
    let remainder = secs % step;

    if remainder == 0 {
        Duration::seconds(secs)
    } else {
        Duration::seconds(secs - remainder + step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// RQ-001: exact boundaries stay unchanged
    #[test]
    fn test_exact_boundaries_unchanged() {
        for minutes in [0, 15, 30, 45, 60, 90, 120, 165] {
            assert_eq!(
                round_up_quarter_hour(Duration::minutes(minutes)),
                Duration::minutes(minutes),
                "{minutes} minutes should stay unchanged"
            );
        }
    }

    /// RQ-002: remainders snap up, never down
    #[test]
    fn test_remainders_snap_up() {
        assert_eq!(
            round_up_quarter_hour(Duration::minutes(1)),
            Duration::minutes(15)
        );
        assert_eq!(
            round_up_quarter_hour(Duration::minutes(16)),
            Duration::minutes(30)
        );
        assert_eq!(
            round_up_quarter_hour(Duration::minutes(31)),
            Duration::minutes(45)
        );
        assert_eq!(
            round_up_quarter_hour(Duration::minutes(46)),
            Duration::minutes(60)
        );
    }

    /// RQ-003: sub-minute remainders also snap to the next quarter
    #[test]
    fn test_sub_minute_remainder() {
        assert_eq!(
            round_up_quarter_hour(Duration::seconds(1)),
            Duration::minutes(15)
        );
        assert_eq!(
            round_up_quarter_hour(Duration::minutes(90) + Duration::seconds(1)),
            Duration::minutes(105)
        );
    }

    /// RQ-004: a multiplied lab duration of 162 minutes rounds to 165
    #[test]
    fn test_162_minutes_rounds_to_165() {
        assert_eq!(
            round_up_quarter_hour(Duration::minutes(162)),
            Duration::minutes(165)
        );
    }

    /// RQ-005: idempotence on a sample grid
    #[test]
    fn test_idempotent() {
        for minutes in 0..200 {
            let once = round_up_quarter_hour(Duration::minutes(minutes));
            assert_eq!(round_up_quarter_hour(once), once);
        }
    }

    /// RQ-006: monotonicity on a sample grid
    #[test]
    fn test_monotonic() {
        for minutes in 0..199 {
            let a = round_up_quarter_hour(Duration::minutes(minutes));
            let b = round_up_quarter_hour(Duration::minutes(minutes + 1));
            assert!(a <= b);
        }
    }

    /// RQ-007: zero stays zero
    #[test]
    fn test_zero_stays_zero() {
        assert_eq!(round_up_quarter_hour(Duration::zero()), Duration::zero());
    }
}
