//! Booking-queue resolution for sign-up ledgers.
//!
//! This module interprets a session's ordered claimant list as an implicit
//! priority queue, splitting it into booked and reserve TAs, and provides
//! the ledger filters used by reporting callers.

mod filters;
mod partition;

pub use filters::{
    DEFAULT_STAFFING_FACTOR, by_claimant, by_date, by_event_type, understaffed,
};
pub use partition::{BookingPartition, is_booked, normalize_id, partition};
