//! Configuration loading and management for the salary engine.
//!
//! A tax profile is a YAML file holding profile metadata and the seven
//! calculation parameters. Any parameter left out of the file takes its
//! built-in default. Server settings for the binary come from the
//! environment.
//!
//! # Example
//!
//! ```no_run
//! use salary_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/dk_standard").unwrap();
//! println!("Loaded profile: {}", loader.metadata().name);
//! ```

mod loader;
mod settings;
mod types;

pub use loader::{ConfigLoader, PROFILE_FILE};
pub use settings::{ADDR_VAR, LOG_VAR, PROFILE_VAR, ServerSettings};
pub use types::{CalculatorConfig, ProfileMetadata, TaxProfile};
