//! Tracing library adapter implementation.

use crate::engine::{line_from_bytes, EngineLevel, Field, StructuredLogger};
use crate::logging::{log_debug, log_error, log_info, log_trace, log_warn};
use serde_json::{Map, Value};
use std::io::{self, Write};
use std::sync::Arc;

/// Engine that delegates to the `tracing` crate.
///
/// This lets a named-logger consumer write into whatever subscriber the
/// application already installed. `tracing` field names are fixed at the
/// callsite, so context and per-record fields travel together as one JSON
/// object in the `fields` field; the message is the event message.
///
/// Level mapping onto `tracing`: fatal and panic become `ERROR`, unleveled
/// records become `INFO`. The threshold is applied here before the subscriber
/// sees anything, so the subscriber's own filter still applies on top.
///
/// # Example
///
/// ```rust
/// use named_log_bridge::{Adapter, NamedLogger, TracingLogger};
///
/// // Assumes a tracing subscriber is already initialized
/// let logger = Adapter::new(TracingLogger::new());
/// logger.info("Using tracing backend", &[]);
/// ```
#[derive(Debug, Clone)]
pub struct TracingLogger {
    context: Arc<Map<String, Value>>,
    level: EngineLevel,
}

impl TracingLogger {
    /// Create a tracing engine with a trace threshold and no context.
    pub fn new() -> Self {
        Self {
            context: Arc::new(Map::new()),
            level: EngineLevel::TRACE,
        }
    }

    fn render_fields(&self, fields: &[Field]) -> String {
        let mut merged = (*self.context).clone();
        for (key, value) in fields {
            merged.insert(key.clone(), value.clone());
        }
        Value::Object(merged).to_string()
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl StructuredLogger for TracingLogger {
    fn with_fields(&self, fields: &[Field]) -> Self {
        let mut context = (*self.context).clone();
        for (key, value) in fields {
            context.insert(key.clone(), value.clone());
        }
        Self {
            context: Arc::new(context),
            level: self.level,
        }
    }

    fn emit(&self, level: EngineLevel, fields: &[Field], message: &str) {
        if !self.level.enables(level) {
            return;
        }
        let rendered = self.render_fields(fields);
        match level {
            EngineLevel::TRACE => log_trace!(fields = %rendered, "{}", message),
            EngineLevel::DEBUG => log_debug!(fields = %rendered, "{}", message),
            EngineLevel::INFO | EngineLevel::NO_LEVEL => {
                log_info!(fields = %rendered, "{}", message)
            }
            EngineLevel::WARN => log_warn!(fields = %rendered, "{}", message),
            _ => log_error!(fields = %rendered, "{}", message),
        }
    }

    fn level(&self) -> EngineLevel {
        self.level
    }

    fn with_level(&self, level: EngineLevel) -> Self {
        Self {
            context: Arc::clone(&self.context),
            level,
        }
    }
}

impl Write for TracingLogger {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.log(&[], &line_from_bytes(buf));
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
