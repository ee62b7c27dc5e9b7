//! Named-logger trait definition.

use crate::core_types::Level;
use crate::standard::{StandardLogger, StandardLoggerOptions};
use serde_json::Value;
use std::io::Write;

/// Leveled, hierarchically named logger taking positional key/value arguments.
///
/// This is the interface consumers such as replication or consensus libraries
/// are written against. Arguments are an alternating key/value list; see
/// [`pair_args`](crate::pair_args) for how odd-length lists and non-string keys
/// are handled.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`. [`with`](Self::with),
/// [`named`](Self::named) and [`reset_named`](Self::reset_named) return new,
/// independent loggers that can go to other threads. [`set_level`](Self::set_level)
/// changes the receiver in place and takes `&mut self`; loggers derived before
/// the call keep the level they had.
///
/// # Example
///
/// ```rust
/// use named_log_bridge::{args, Adapter, JsonLogger, NamedLogger};
///
/// let root = Adapter::new(JsonLogger::new(std::io::sink()));
/// let raft = root.named("raft");
/// let transport = raft.named("transport");
/// assert_eq!(transport.name(), "raft.transport");
///
/// transport.info("connected", &args!["peer", "node2"]);
/// ```
pub trait NamedLogger: Send + Sync {
    /// Emit a record at `level`.
    ///
    /// `Level::OFF` emits nothing. Unknown levels emit an error record naming
    /// the level, without the supplied arguments.
    fn log(&self, level: Level, message: &str, args: &[Value]);

    /// Emit a trace-level record.
    fn trace(&self, message: &str, args: &[Value]) {
        self.log(Level::TRACE, message, args);
    }

    /// Emit a debug-level record.
    fn debug(&self, message: &str, args: &[Value]) {
        self.log(Level::DEBUG, message, args);
    }

    /// Emit an info-level record.
    fn info(&self, message: &str, args: &[Value]) {
        self.log(Level::INFO, message, args);
    }

    /// Emit a warning-level record.
    fn warn(&self, message: &str, args: &[Value]) {
        self.log(Level::WARN, message, args);
    }

    /// Emit an error-level record.
    fn error(&self, message: &str, args: &[Value]) {
        self.log(Level::ERROR, message, args);
    }

    /// True only when the current level is exactly trace.
    fn is_trace(&self) -> bool;

    /// True only when the current level is exactly debug.
    fn is_debug(&self) -> bool;

    /// True only when the current level is exactly info.
    fn is_info(&self) -> bool;

    /// True only when the current level is exactly warn.
    fn is_warn(&self) -> bool;

    /// True only when the current level is exactly error.
    fn is_error(&self) -> bool;

    /// Arguments bound by earlier [`with`](Self::with) calls, if tracked.
    fn implied_args(&self) -> Vec<Value>;

    /// Derive a logger that adds `args` to every record.
    fn with(&self, args: &[Value]) -> Box<dyn NamedLogger>;

    /// Current dot-separated name, empty when never named.
    fn name(&self) -> &str;

    /// Derive a logger whose name is this one's with `name` appended.
    fn named(&self, name: &str) -> Box<dyn NamedLogger>;

    /// Derive a logger named exactly `name`.
    fn reset_named(&self, name: &str) -> Box<dyn NamedLogger>;

    /// Change the level of this logger in place.
    fn set_level(&mut self, level: Level);

    /// Current level.
    fn get_level(&self) -> Level;

    /// A line-oriented logger writing into this one.
    fn standard_logger(&self, options: &StandardLoggerOptions) -> StandardLogger;

    /// This logger as a byte sink.
    fn standard_writer(&self, options: &StandardLoggerOptions) -> Box<dyn Write + Send>;
}
