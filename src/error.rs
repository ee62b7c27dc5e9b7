//! Error types for the fallible edges of the bridge.
//!
//! The logging path itself never fails: unknown levels handed to
//! [`NamedLogger::log`](crate::NamedLogger::log) or
//! [`NamedLogger::set_level`](crate::NamedLogger::set_level) are reported as
//! error records and the call carries on. [`AdapterError`] covers everything
//! around that path:
//! - Parsing level names from strings or configuration
//! - Validating the name-field key before an adapter is built
//! - I/O surfaced by the standard-stream shims
//!
//! # Result Type
//!
//! Use [`AdapterResult<T>`] as a convenient alias for `Result<T, AdapterError>`:
//!
//! ```rust
//! use named_log_bridge::{AdapterResult, Level};
//!
//! fn parse(name: &str) -> AdapterResult<Level> {
//!     name.parse()
//! }
//!
//! assert_eq!(parse("warn").unwrap(), Level::WARN);
//! assert!(parse("loud").is_err());
//! ```

use crate::logging::{log_error, log_warn};
use thiserror::Error;

/// Convenient result type for bridge operations that can fail.
pub type AdapterResult<T> = std::result::Result<T, AdapterError>;

/// Errors that can occur outside the logging path.
///
/// Use the constructor methods, which log the error as it is created.
///
/// | Variant | Raised by |
/// |---------|-----------|
/// | `UnknownLevel` | `Level::from_str`, config deserialisation |
/// | `InvalidNameField` | `AdapterConfig::validate` |
/// | `Io` | `StandardLogger` writes |
#[derive(Error, Debug)]
pub enum AdapterError {
    /// A level name did not match any known level.
    ///
    /// Accepted names: "trace", "debug", "info", "warn", "error", "off", "none"
    #[error("Unknown log level: {value}")]
    UnknownLevel {
        /// The text that failed to parse.
        value: String,
    },

    /// The configured name-field key cannot be used.
    #[error("Invalid name field {field:?}: {reason}")]
    InvalidNameField {
        /// The rejected key.
        field: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Writing to the underlying byte sink failed.
    #[error("Log sink write failed: {0}")]
    Io(#[from] std::io::Error),
}

impl AdapterError {
    /// Create an unknown level error (logs at WARN level).
    pub fn unknown_level(value: impl Into<String>) -> Self {
        let value = value.into();
        log_warn!(
            error_type = "unknown_level",
            value = %value,
            "Unrecognised log level name"
        );
        Self::UnknownLevel { value }
    }

    /// Create an invalid name field error (logs at ERROR level).
    pub fn invalid_name_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        let field = field.into();
        let reason = reason.into();
        log_error!(
            error_type = "invalid_name_field",
            field = %field,
            reason = %reason,
            "Name field configuration rejected"
        );
        Self::InvalidNameField { field, reason }
    }

    /// Whether the error came from caller input rather than the environment.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownLevel { .. } | Self::InvalidNameField { .. }
        )
    }
}
