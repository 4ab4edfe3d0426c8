//! Calculation logic for the Teaching-Time Accounting Engine.
//!
//! This module contains all the calculation functions: quarter-hour
//! rounding, event classification and prep-time multiplier lookup, paid
//! time per session, ledger aggregation, and the employment-period search.

mod aggregate;
mod employment_period;
mod paid_time;
mod prep_multiplier;
mod rounding;

pub use aggregate::{
    hours_per_event_type, hours_per_event_type_with, hours_per_student, hours_per_student_with,
    hours_per_ta, hours_per_ta_with, max_hours, max_hours_with, total_hours, total_hours_with,
};
pub use employment_period::{
    DEFAULT_LOW_PERCENTAGE, DEFAULT_MIN_DAYS, FULL_TIME_ANNUAL_HOURS, NOMINAL_YEAR_DAYS,
    PeriodOptions, compute_employment_periods, compute_percentage,
};
pub use paid_time::{paid_time, scheduled_time};
pub use prep_multiplier::{EventCategory, classify_event, is_remote, prep_multiplier};
pub use rounding::{QUARTER_HOUR_MINUTES, round_up_quarter_hour};
