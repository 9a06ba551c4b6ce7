//! Error types for the salary engine.
//!
//! The calculation core never fails: invalid numbers propagate as `NaN` or
//! infinity. Errors only arise at the edges, when loading settings or a tax
//! profile, or when interpreting a year plan.

use thiserror::Error;

use crate::models::Month;

/// The main error type for the salary engine.
///
/// # Example
///
/// ```
/// use salary_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/profile.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/profile.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A server setting had an unusable value.
    #[error("Invalid value '{value}' for setting {key}")]
    InvalidSetting {
        /// The setting name.
        key: String,
        /// The rejected value.
        value: String,
    },

    /// The server could not bind its address or stopped with an I/O error.
    #[error("Server error on {addr}: {source}")]
    Server {
        /// The listen address.
        addr: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A month name could not be recognised.
    #[error("Unknown month: {name}")]
    UnknownMonth {
        /// The name that was given.
        name: String,
    },

    /// A year plan listed the same month more than once.
    #[error("Month '{month}' appears more than once in the year plan")]
    DuplicateMonth {
        /// The repeated month.
        month: Month,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/profile.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/profile.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_setting_displays_key_and_value() {
        let error = EngineError::InvalidSetting {
            key: "SALARY_ENGINE_LOG".to_string(),
            value: "loud".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid value 'loud' for setting SALARY_ENGINE_LOG"
        );
    }

    #[test]
    fn test_server_error_displays_addr_and_cause() {
        let error = EngineError::Server {
            addr: "127.0.0.1:3000".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use"),
        };
        assert_eq!(
            error.to_string(),
            "Server error on 127.0.0.1:3000: address in use"
        );
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_unknown_month_displays_name() {
        let error = EngineError::UnknownMonth {
            name: "Smarch".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown month: Smarch");
    }

    #[test]
    fn test_duplicate_month_displays_month() {
        let error = EngineError::DuplicateMonth {
            month: Month::March,
        };
        assert_eq!(
            error.to_string(),
            "Month 'march' appears more than once in the year plan"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_unknown_month() -> EngineResult<()> {
            Err(EngineError::UnknownMonth {
                name: "x".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_unknown_month()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
