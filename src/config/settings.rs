//! Server settings read from the environment.

use std::path::PathBuf;

use tracing::Level;

use crate::error::{EngineError, EngineResult};

/// Environment variable holding the listen address.
pub const ADDR_VAR: &str = "SALARY_ENGINE_ADDR";
/// Environment variable holding the profile directory.
pub const PROFILE_VAR: &str = "SALARY_ENGINE_PROFILE";
/// Environment variable holding the log level.
pub const LOG_VAR: &str = "SALARY_ENGINE_LOG";

/// Settings for the server binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    /// Address to listen on.
    pub addr: String,
    /// Directory containing `profile.yaml`.
    pub profile_dir: PathBuf,
    /// Maximum log level.
    pub log_level: Level,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:3000".to_string(),
            profile_dir: PathBuf::from("./config/dk_standard"),
            log_level: Level::INFO,
        }
    }
}

impl ServerSettings {
    /// Reads settings from the process environment.
    ///
    /// Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> EngineResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`; unset variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> EngineResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(addr) = lookup(ADDR_VAR) {
            settings.addr = addr;
        }
        if let Some(dir) = lookup(PROFILE_VAR) {
            settings.profile_dir = PathBuf::from(dir);
        }
        if let Some(level) = lookup(LOG_VAR) {
            settings.log_level = level.parse().map_err(|_| EngineError::InvalidSetting {
                key: LOG_VAR.to_string(),
                value: level,
            })?;
        }

        Ok(settings)
    }
}
