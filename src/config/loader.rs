//! Policy loading functionality.
//!
//! This module provides the [`PolicyLoader`] type for loading compensation
//! policies from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{MarkersConfig, MultiplierConfig, PolicyConfig, PolicyMetadata};

/// Loads and provides access to a compensation policy.
///
/// The `PolicyLoader` reads YAML configuration files from a directory and
/// exposes the resulting [`PolicyConfig`].
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/standard/
/// ├── policy.yaml       # Policy metadata
/// ├── markers.yaml      # Event-type and remote-modality markers
/// └── multipliers.yaml  # Exercise multiplier and tutoring epoch table
/// ```
///
/// # Example
///
/// ```no_run
/// use signup_engine::config::PolicyLoader;
///
/// let loader = PolicyLoader::load("./config/standard").unwrap();
/// println!("Policy: {}", loader.config().metadata().name);
/// ```
#[derive(Debug, Clone)]
pub struct PolicyLoader {
    config: PolicyConfig,
}

impl PolicyLoader {
    /// Loads a policy from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g. "./config/standard")
    ///
    /// # Returns
    ///
    /// Returns a `PolicyLoader` instance on success, or an error if any
    /// required file is missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<PolicyMetadata>(&path.join("policy.yaml"))?;
        let markers = Self::load_yaml::<MarkersConfig>(&path.join("markers.yaml"))?;
        let multipliers = Self::load_yaml::<MultiplierConfig>(&path.join("multipliers.yaml"))?;

        Ok(Self {
            config: PolicyConfig::new(metadata, markers.markers, multipliers),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded policy configuration.
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }
}
