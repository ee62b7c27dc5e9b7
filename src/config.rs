use crate::adapter::DEFAULT_NAME_FIELD;
use crate::core_types::Level;
use crate::error::{AdapterError, AdapterResult};
use crate::logging::log_debug;
use serde::{Deserialize, Serialize};

pub use crate::engine::RESERVED_KEYS;

/// Adapter configuration, typically deserialised from the host application's
/// config file.
///
/// Every field has a default, so an empty table is a valid configuration:
///
/// ```rust
/// use named_log_bridge::{AdapterConfig, Level};
///
/// let config: AdapterConfig = serde_json::from_str(r#"{"level": "warn"}"#).unwrap();
/// assert_eq!(config.name_field, "hclog_name");
/// assert_eq!(config.level, Some(Level::WARN));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    /// Context key the logger name is written to.
    pub name_field: String,
    /// Initial level; `None` keeps whatever the engine logger was built with.
    pub level: Option<Level>,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            name_field: DEFAULT_NAME_FIELD.to_string(),
            level: None,
        }
    }
}

impl AdapterConfig {
    /// Use `name_field` as the name key.
    pub fn with_name_field(mut self, name_field: impl Into<String>) -> Self {
        self.name_field = name_field.into();
        self
    }

    /// Start adapters at `level`.
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::InvalidNameField`] if the name field is blank or
    /// is one of [`RESERVED_KEYS`].
    pub fn validate(&self) -> AdapterResult<()> {
        if self.name_field.trim().is_empty() {
            return Err(AdapterError::invalid_name_field(
                &self.name_field,
                "name field must not be blank",
            ));
        }
        if RESERVED_KEYS.contains(&self.name_field.as_str()) {
            return Err(AdapterError::invalid_name_field(
                &self.name_field,
                "name field collides with a reserved record key",
            ));
        }

        log_debug!(name_field = %self.name_field, "Adapter configuration validated");
        Ok(())
    }
}
