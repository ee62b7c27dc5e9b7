//! JSON-lines engine.

use crate::engine::{line_from_bytes, EngineLevel, Field, StructuredLogger};
use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Value};
use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

const LEVEL_KEY: &str = "level";
const TIME_KEY: &str = "time";
const MESSAGE_KEY: &str = "message";

/// Record keys written by the engine itself. Context and per-record fields
/// using one of these keys are left out of the record.
pub const RESERVED_KEYS: [&str; 3] = [LEVEL_KEY, MESSAGE_KEY, TIME_KEY];

/// Engine that writes one JSON object per record to a shared sink.
///
/// Record layout: `level` (omitted for unleveled records), `time` (when
/// enabled), context fields in the order they were attached, per-record
/// fields, then `message`. Attaching a key twice keeps its first position and
/// the latest value. Fields named like one of the [`RESERVED_KEYS`] never
/// reach the record.
///
/// Cloning or deriving shares the sink; each record is written with a single
/// `write_all` while the sink is locked, so lines from different loggers never
/// interleave.
///
/// # Example
///
/// ```rust
/// use named_log_bridge::engine::{JsonLogger, StructuredLogger};
///
/// let logger = JsonLogger::new(std::io::sink()).with_str("component", "raft");
/// logger.info(&[], "Starting");
/// ```
#[derive(Clone)]
pub struct JsonLogger {
    sink: Arc<Mutex<Box<dyn Write + Send>>>,
    context: Arc<Map<String, Value>>,
    level: EngineLevel,
    timestamp: bool,
}

impl JsonLogger {
    /// Create a logger writing to `sink` with a trace threshold and no context.
    pub fn new<W>(sink: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            sink: Arc::new(Mutex::new(Box::new(sink))),
            context: Arc::new(Map::new()),
            level: EngineLevel::TRACE,
            timestamp: false,
        }
    }

    /// Create a logger writing to standard error.
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }

    /// Derive a logger that stamps every record with an RFC 3339 `time` field.
    pub fn with_timestamp(&self) -> Self {
        Self {
            timestamp: true,
            ..self.clone()
        }
    }

    fn encode(
        &self,
        level: EngineLevel,
        fields: &[Field],
        message: &str,
    ) -> serde_json::Result<Vec<u8>> {
        let mut record = Map::new();
        if level != EngineLevel::NO_LEVEL {
            record.insert(LEVEL_KEY.to_string(), Value::String(level.to_string()));
        }
        if self.timestamp {
            let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
            record.insert(TIME_KEY.to_string(), Value::String(now));
        }
        let attached = self.context.iter().chain(fields.iter().map(|(k, v)| (k, v)));
        for (key, value) in attached {
            if !RESERVED_KEYS.contains(&key.as_str()) {
                record.insert(key.clone(), value.clone());
            }
        }
        record.insert(MESSAGE_KEY.to_string(), Value::String(message.to_string()));

        let mut line = serde_json::to_vec(&Value::Object(record))?;
        line.push(b'\n');
        Ok(line)
    }

    fn write_record(
        &self,
        level: EngineLevel,
        fields: &[Field],
        message: &str,
    ) -> io::Result<()> {
        if !self.level.enables(level) {
            return Ok(());
        }
        let line = self.encode(level, fields, message)?;
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        sink.write_all(&line)
    }
}

impl fmt::Debug for JsonLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonLogger")
            .field("context", &self.context)
            .field("level", &self.level)
            .field("timestamp", &self.timestamp)
            .finish_non_exhaustive()
    }
}

impl StructuredLogger for JsonLogger {
    fn with_fields(&self, fields: &[Field]) -> Self {
        let mut context = (*self.context).clone();
        for (key, value) in fields {
            context.insert(key.clone(), value.clone());
        }
        Self {
            context: Arc::new(context),
            ..self.clone()
        }
    }

    fn emit(&self, level: EngineLevel, fields: &[Field], message: &str) {
        // Sink failures are the sink's problem; emitting never fails the caller.
        let _ = self.write_record(level, fields, message);
    }

    fn level(&self) -> EngineLevel {
        self.level
    }

    fn with_level(&self, level: EngineLevel) -> Self {
        Self {
            level,
            ..self.clone()
        }
    }
}

impl Write for JsonLogger {
    /// Emit `buf` as one unleveled record, minus a trailing newline.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let message = line_from_bytes(buf);
        self.write_record(EngineLevel::NO_LEVEL, &[], &message)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.sink
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .flush()
    }
}
