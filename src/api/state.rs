//! Application state for the Teaching-Time Accounting Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::PolicyLoader;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// such as the loaded compensation policy.
#[derive(Clone)]
pub struct AppState {
    /// The loaded compensation policy.
    policy: Arc<PolicyLoader>,
}

impl AppState {
    /// Creates a new application state with the given policy loader.
    pub fn new(policy: PolicyLoader) -> Self {
        Self {
            policy: Arc::new(policy),
        }
    }

    /// Returns a reference to the policy loader.
    pub fn policy(&self) -> &PolicyLoader {
        &self.policy
    }
}
