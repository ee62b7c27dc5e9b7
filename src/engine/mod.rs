//! Structured-logging engines the adapter delegates to.
//!
//! The adapter never formats or writes anything itself. Everything it needs
//! from an engine is captured by [`StructuredLogger`]:
//! - derive a logger carrying extra context (`with_str`, `with_fields`)
//! - emit one record at a level (`emit` plus the per-severity helpers)
//! - read and replace the level threshold (`level`, `with_level`)
//! - accept raw bytes as records (`io::Write`)
//!
//! Engine loggers are values: deriving returns a new logger and leaves the
//! parent untouched. Deriving from a shared parent on several threads at once
//! must be safe, since adapters handed to different threads rely on it.
//!
//! # Engines
//!
//! - [`JsonLogger`]: JSON lines written to any `io::Write` sink
//! - [`TracingLogger`]: records forwarded to the `tracing` facade

mod json;
mod tracing_adapter;

pub use json::{JsonLogger, RESERVED_KEYS};
pub use tracing_adapter::TracingLogger;

pub use crate::core_types::Field;
use serde_json::Value;
use std::fmt;
use std::io;

/// Severity as the engine understands it.
///
/// Numeric newtype; higher values are more severe except for the two
/// sentinels. A logger emits a record when the record's level is at or above
/// the logger's threshold, so a [`NO_LEVEL`](Self::NO_LEVEL) threshold lets
/// only unleveled records through and [`DISABLED`](Self::DISABLED) lets none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct EngineLevel(i8);

impl EngineLevel {
    /// Most verbose diagnostics.
    pub const TRACE: EngineLevel = EngineLevel(-1);
    /// Debugging information.
    pub const DEBUG: EngineLevel = EngineLevel(0);
    /// Normal operational messages.
    pub const INFO: EngineLevel = EngineLevel(1);
    /// Something unexpected but recoverable.
    pub const WARN: EngineLevel = EngineLevel(2);
    /// Failures.
    pub const ERROR: EngineLevel = EngineLevel(3);
    /// Failures the engine's own callers treat as fatal.
    pub const FATAL: EngineLevel = EngineLevel(4);
    /// Failures the engine's own callers treat as panics.
    pub const PANIC: EngineLevel = EngineLevel(5);
    /// Records without a level.
    pub const NO_LEVEL: EngineLevel = EngineLevel(6);
    /// Threshold that suppresses every record.
    pub const DISABLED: EngineLevel = EngineLevel(7);

    /// Wrap a raw level value, known or not.
    pub const fn from_raw(value: i8) -> Self {
        Self(value)
    }

    /// The raw numeric value.
    pub const fn as_raw(self) -> i8 {
        self.0
    }

    /// Whether a logger with this threshold emits a record at `record`.
    pub fn enables(self, record: EngineLevel) -> bool {
        record != EngineLevel::DISABLED && record >= self
    }
}

impl fmt::Display for EngineLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            EngineLevel::TRACE => "trace",
            EngineLevel::DEBUG => "debug",
            EngineLevel::INFO => "info",
            EngineLevel::WARN => "warn",
            EngineLevel::ERROR => "error",
            EngineLevel::FATAL => "fatal",
            EngineLevel::PANIC => "panic",
            EngineLevel::NO_LEVEL => "",
            EngineLevel::DISABLED => "disabled",
            EngineLevel(other) => return write!(f, "{other}"),
        };
        f.write_str(name)
    }
}

/// The engine-side logging interface the adapter is written against.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`, and `with_*` must be callable from
/// several threads on the same parent at once.
pub trait StructuredLogger: Clone + fmt::Debug + io::Write + Send + Sync + 'static {
    /// Derive a logger that carries the given fields on every record.
    ///
    /// A key already present in the context keeps its position and takes
    /// the new value.
    fn with_fields(&self, fields: &[Field]) -> Self;

    /// Derive a logger carrying one extra string field.
    fn with_str(&self, key: &str, value: &str) -> Self {
        self.with_fields(&[(key.to_string(), Value::String(value.to_string()))])
    }

    /// Emit one record. Fields are attached before the message is set.
    fn emit(&self, level: EngineLevel, fields: &[Field], message: &str);

    /// Current threshold.
    fn level(&self) -> EngineLevel;

    /// Derive a logger with a different threshold.
    fn with_level(&self, level: EngineLevel) -> Self;

    fn trace(&self, fields: &[Field], message: &str) {
        self.emit(EngineLevel::TRACE, fields, message);
    }

    fn debug(&self, fields: &[Field], message: &str) {
        self.emit(EngineLevel::DEBUG, fields, message);
    }

    fn info(&self, fields: &[Field], message: &str) {
        self.emit(EngineLevel::INFO, fields, message);
    }

    fn warn(&self, fields: &[Field], message: &str) {
        self.emit(EngineLevel::WARN, fields, message);
    }

    fn error(&self, fields: &[Field], message: &str) {
        self.emit(EngineLevel::ERROR, fields, message);
    }

    /// Emit a record without a level.
    fn log(&self, fields: &[Field], message: &str) {
        self.emit(EngineLevel::NO_LEVEL, fields, message);
    }
}

/// Text of a raw write with one trailing newline removed.
pub(crate) fn line_from_bytes(buf: &[u8]) -> String {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    String::from_utf8_lossy(buf).into_owned()
}
