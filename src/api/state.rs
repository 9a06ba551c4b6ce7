//! Application state for the salary engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::TaxCalculator;
use crate::config::ConfigLoader;

use super::request::ParameterOverrides;

/// Shared application state.
///
/// Holds the tax profile loaded at startup.
#[derive(Clone)]
pub struct AppState {
    /// The loaded tax profile.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Builds a calculator from the profile and any request overrides.
    pub fn calculator(&self, overrides: Option<&ParameterOverrides>) -> TaxCalculator {
        let base = self.config.parameters();
        let config = match overrides {
            Some(overrides) => overrides.apply_to(base),
            None => *base,
        };
        TaxCalculator::new(config)
    }
}
