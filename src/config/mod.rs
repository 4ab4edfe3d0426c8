//! Compensation policy configuration.
//!
//! This module provides the strongly-typed policy configuration and the
//! [`PolicyLoader`] that reads it from a YAML directory.

mod loader;
mod types;

pub use loader::PolicyLoader;
pub use types::{
    EventMarkers, KindRates, MultiplierConfig, PolicyConfig, PolicyMetadata, TutoringEpoch,
};
