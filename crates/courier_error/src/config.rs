//! Configuration error types.

use std::path::PathBuf;

/// Configuration error conditions.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ConfigErrorKind {
    /// The configuration file could not be read.
    #[display("Failed to read config file {}: {}", path.display(), message)]
    FileRead {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error message.
        message: String,
    },

    /// The configuration file is not valid TOML for the expected schema.
    #[display("Failed to parse config: {_0}")]
    Parse(String),

    /// A required field was not provided by any source.
    #[display("Missing required field: {_0}")]
    MissingField(String),

    /// A field was provided but its value is unusable.
    #[display("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Field name.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Configuration error with source location.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// Error kind
    pub kind: ConfigErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with the given kind at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use courier_error::{ConfigError, ConfigErrorKind};
    ///
    /// let err = ConfigError::new(ConfigErrorKind::MissingField("token".to_string()));
    /// assert!(err.to_string().contains("token"));
    /// ```
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for an [`ConfigErrorKind::InvalidValue`] error.
    #[track_caller]
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ConfigErrorKind::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        })
    }
}
