//! Core data models for the Teaching-Time Accounting Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employment;
mod session;

pub use employment::{EmploymentKind, EmploymentWindow};
pub use session::SessionRecord;
