//! The named-logger adapter over a structured engine.
//!
//! The engine has no notion of a logger name, only flat key/value context, so
//! the hierarchical name is kept as a plain string on the adapter and written
//! into one context field (the *name field*) whenever it changes. The field is
//! attached at construction with an empty value, so every record carries it.

use crate::config::AdapterConfig;
use crate::core_types::{engine_level_for, level_for, pair_args, Level};
use crate::engine::{EngineLevel, JsonLogger, StructuredLogger};
use crate::error::AdapterResult;
use crate::logger::NamedLogger;
use crate::logging::log_debug;
use crate::standard::{StandardLogger, StandardLoggerOptions};
use serde_json::Value;
use std::fmt::Display;
use std::io::Write;

/// Context key the logger name is written to unless configured otherwise.
pub const DEFAULT_NAME_FIELD: &str = "hclog_name";

/// [`NamedLogger`] implemented on top of a [`StructuredLogger`].
///
/// Naming and context operations return new adapters wrapping derived engine
/// loggers. [`set_level`](NamedLogger::set_level) replaces the engine logger
/// held by this adapter.
///
/// # Example
///
/// ```rust
/// use named_log_bridge::{args, Adapter, JsonLogger, NamedLogger, StructuredLogger};
///
/// let engine = JsonLogger::new(std::io::stderr()).with_str("component", "raft");
/// let logger = Adapter::new(engine);
///
/// logger.named("fsm").warn("snapshot slow", &args!["ms", 1200]);
/// ```
#[derive(Debug, Clone)]
pub struct Adapter<L: StructuredLogger = JsonLogger> {
    logger: L,
    name_field: String,
    name: String,
}

impl<L: StructuredLogger> Adapter<L> {
    /// Wrap `logger`, writing names to [`DEFAULT_NAME_FIELD`].
    pub fn new(logger: L) -> Self {
        Self::with_name_field(logger, DEFAULT_NAME_FIELD)
    }

    /// Wrap `logger`, writing names to `name_field`.
    ///
    /// The key is not checked here. A key the engine writes itself, such as
    /// `level`, never reaches the record, so names are lost; use
    /// [`from_config`](Self::from_config) to have the key validated.
    pub fn with_name_field(logger: L, name_field: impl Into<String>) -> Self {
        let name_field = name_field.into();
        Self {
            logger: logger.with_str(&name_field, ""),
            name_field,
            name: String::new(),
        }
    }

    /// Wrap `logger` according to `config`.
    ///
    /// The name field comes from the config and the initial level, when set,
    /// is applied as if by [`set_level`](NamedLogger::set_level).
    pub fn from_config(logger: L, config: &AdapterConfig) -> AdapterResult<Self> {
        config.validate()?;

        let mut adapter = Self::with_name_field(logger, config.name_field.as_str());
        if let Some(level) = config.level {
            adapter.set_level(level);
        }

        log_debug!(
            name_field = %adapter.name_field,
            level = %adapter.get_level(),
            "Named logger adapter configured"
        );
        Ok(adapter)
    }

    /// Context key holding the logger name.
    pub fn name_field(&self) -> &str {
        &self.name_field
    }

    /// The engine logger records go to.
    pub fn inner(&self) -> &L {
        &self.logger
    }

    pub fn into_inner(self) -> L {
        self.logger
    }

    fn derive(&self, logger: L, name: String) -> Self {
        Self {
            logger,
            name_field: self.name_field.clone(),
            name,
        }
    }

    fn renamed(&self, name: String) -> Self {
        let logger = self.logger.with_str(&self.name_field, &name);
        self.derive(logger, name)
    }

    fn report_unknown_level(&self, level: impl Display) {
        self.logger.error(&[], &format!("Unknown log level: {level}"));
    }

    fn level_is(&self, level: EngineLevel) -> bool {
        self.logger.level() == level
    }
}

impl<L: StructuredLogger> NamedLogger for Adapter<L> {
    fn log(&self, level: Level, message: &str, args: &[Value]) {
        let Some(engine_level) = engine_level_for(level) else {
            self.report_unknown_level(level);
            return;
        };
        if engine_level == EngineLevel::DISABLED {
            return;
        }
        self.logger.emit(engine_level, &pair_args(args), message);
    }

    fn trace(&self, message: &str, args: &[Value]) {
        self.logger.trace(&pair_args(args), message);
    }

    fn debug(&self, message: &str, args: &[Value]) {
        self.logger.debug(&pair_args(args), message);
    }

    fn info(&self, message: &str, args: &[Value]) {
        self.logger.info(&pair_args(args), message);
    }

    fn warn(&self, message: &str, args: &[Value]) {
        self.logger.warn(&pair_args(args), message);
    }

    fn error(&self, message: &str, args: &[Value]) {
        self.logger.error(&pair_args(args), message);
    }

    fn is_trace(&self) -> bool {
        self.level_is(EngineLevel::TRACE)
    }

    fn is_debug(&self) -> bool {
        self.level_is(EngineLevel::DEBUG)
    }

    fn is_info(&self) -> bool {
        self.level_is(EngineLevel::INFO)
    }

    fn is_warn(&self) -> bool {
        self.level_is(EngineLevel::WARN)
    }

    fn is_error(&self) -> bool {
        self.level_is(EngineLevel::ERROR)
    }

    // Context bound through `with` lives in the engine, not here.
    fn implied_args(&self) -> Vec<Value> {
        Vec::new()
    }

    fn with(&self, args: &[Value]) -> Box<dyn NamedLogger> {
        let logger = self.logger.with_fields(&pair_args(args));
        Box::new(self.derive(logger, self.name.clone()))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn named(&self, name: &str) -> Box<dyn NamedLogger> {
        let joined = if self.name.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", self.name, name)
        };
        Box::new(self.renamed(joined))
    }

    fn reset_named(&self, name: &str) -> Box<dyn NamedLogger> {
        Box::new(self.renamed(name.to_string()))
    }

    fn set_level(&mut self, level: Level) {
        match engine_level_for(level) {
            Some(engine_level) => self.logger = self.logger.with_level(engine_level),
            None => self.report_unknown_level(level),
        }
    }

    fn get_level(&self) -> Level {
        let current = self.logger.level();
        level_for(current).unwrap_or_else(|| {
            self.report_unknown_level(current);
            Level::NO_LEVEL
        })
    }

    fn standard_logger(&self, _options: &StandardLoggerOptions) -> StandardLogger {
        StandardLogger::new(Box::new(self.logger.clone()))
    }

    fn standard_writer(&self, _options: &StandardLoggerOptions) -> Box<dyn Write + Send> {
        Box::new(self.logger.clone())
    }
}
