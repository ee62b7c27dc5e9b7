//! Line-oriented shims for code that only knows how to write text lines.

use crate::core_types::Level;
use crate::error::AdapterResult;
use std::fmt;
use std::io::Write;

/// Options a caller may pass when asking for a standard logger or writer.
///
/// The fields mirror what named-logger consumers are used to setting. The
/// adapter accepts them and leaves the record shape to the engine's byte-sink
/// convention: every line becomes one unleveled record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StandardLoggerOptions {
    /// Guess a level from a `[LEVEL]` prefix in the line.
    pub infer_levels: bool,
    /// Only infer levels from exact prefix matches.
    pub infer_levels_exact: bool,
    /// Emit every line at this level.
    pub force_level: Option<Level>,
}

/// Minimal line-writing logger: no prefix, no timestamp.
///
/// Each call writes exactly one line to the underlying sink, appending a
/// newline when the text lacks one.
///
/// # Example
///
/// ```rust
/// use named_log_bridge::{Adapter, JsonLogger, NamedLogger, StandardLoggerOptions};
///
/// let adapter = Adapter::new(JsonLogger::new(std::io::sink()));
/// let mut std_logger = adapter.standard_logger(&StandardLoggerOptions::default());
/// std_logger.println(format_args!("snapshot {} taken", 42)).unwrap();
/// ```
pub struct StandardLogger {
    sink: Box<dyn Write + Send>,
}

impl StandardLogger {
    pub fn new(sink: Box<dyn Write + Send>) -> Self {
        Self { sink }
    }

    /// Write formatted text as one line.
    pub fn print(&mut self, args: fmt::Arguments<'_>) -> AdapterResult<()> {
        self.output(args.to_string())
    }

    /// Write formatted text followed by a newline.
    pub fn println(&mut self, args: fmt::Arguments<'_>) -> AdapterResult<()> {
        self.output(format!("{args}\n"))
    }

    /// Write a single line of text.
    pub fn write_line(&mut self, line: &str) -> AdapterResult<()> {
        self.output(line.to_string())
    }

    /// Give back the sink.
    pub fn into_inner(self) -> Box<dyn Write + Send> {
        self.sink
    }

    fn output(&mut self, mut line: String) -> AdapterResult<()> {
        if !line.ends_with('\n') {
            line.push('\n');
        }
        self.sink.write_all(line.as_bytes())?;
        Ok(())
    }
}

impl fmt::Debug for StandardLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StandardLogger").finish_non_exhaustive()
    }
}
