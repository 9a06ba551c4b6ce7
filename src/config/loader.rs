//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a tax profile
//! from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{CalculatorConfig, ProfileMetadata, TaxProfile};

/// File name of the profile inside a profile directory.
pub const PROFILE_FILE: &str = "profile.yaml";

/// Loads and provides access to a tax profile.
///
/// # Directory Structure
///
/// ```text
/// config/dk_standard/
/// └── profile.yaml   # Profile metadata and calculation parameters
/// ```
///
/// # Example
///
/// ```no_run
/// use salary_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/dk_standard")?;
/// println!("Loaded profile: {}", loader.metadata().name);
/// # Ok::<(), salary_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    profile: TaxProfile,
}

impl ConfigLoader {
    /// Loads the profile from the specified directory.
    ///
    /// Returns `ConfigNotFound` when `profile.yaml` is missing and
    /// `ConfigParseError` when it is not a valid profile.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let profile_path = path.as_ref().join(PROFILE_FILE);
        let path_str = profile_path.display().to_string();

        let content = fs::read_to_string(&profile_path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content).map_err(|err| match err {
            EngineError::ConfigParseError { message, .. } => EngineError::ConfigParseError {
                path: path_str,
                message,
            },
            other => other,
        })
    }

    /// Parses a profile from YAML text.
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        let profile: TaxProfile =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;

        Ok(Self { profile })
    }

    /// Wraps an already constructed profile.
    pub fn from_profile(profile: TaxProfile) -> Self {
        Self { profile }
    }

    /// Returns the underlying profile.
    pub fn profile(&self) -> &TaxProfile {
        &self.profile
    }

    /// Returns the profile metadata.
    pub fn metadata(&self) -> &ProfileMetadata {
        &self.profile.profile
    }

    /// Returns the calculation parameters.
    pub fn parameters(&self) -> &CalculatorConfig {
        &self.profile.parameters
    }
}
