//! Teaching-Time Accounting Engine for TA sign-up ledgers
//!
//! This crate turns a roster of timetabled sessions with ordered sign-up
//! lists into paid-hours reports and proposed fixed-term ("amanuensis")
//! employment windows, applying quarter-hour rounding and a policy-versioned
//! preparation-time multiplier.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod ledger;
pub mod models;
pub mod roster;
