//! Severity levels of the named-logger interface.
//!
//! [`Level`] is a transparent numeric newtype rather than a closed enum: callers
//! coded against the named-logger interface can hand over any raw value, and the
//! adapter has to answer values it does not recognise with an error record
//! instead of refusing to compile or panicking.
//!
//! The two free functions in this module are the whole mapping table between
//! [`Level`] and [`EngineLevel`]. Both directions are spelled out explicitly
//! because the engine side has three extra variants (fatal, panic, disabled)
//! that fold into fewer source variants.

use crate::engine::EngineLevel;
use crate::error::AdapterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a record as seen by named-logger callers.
///
/// # Example
///
/// ```rust
/// use named_log_bridge::Level;
///
/// let level: Level = "Debug".parse().unwrap();
/// assert_eq!(level, Level::DEBUG);
/// assert_eq!(level.to_string(), "debug");
/// assert_eq!(Level::from_raw(999).to_string(), "unknown");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[repr(transparent)]
pub struct Level(i32);

impl Level {
    /// Unclassified records; emitted without a level.
    pub const NO_LEVEL: Level = Level(0);
    /// Most verbose diagnostics.
    pub const TRACE: Level = Level(1);
    /// Debugging information.
    pub const DEBUG: Level = Level(2);
    /// Normal operational messages.
    pub const INFO: Level = Level(3);
    /// Something unexpected but recoverable.
    pub const WARN: Level = Level(4);
    /// Failures.
    pub const ERROR: Level = Level(5);
    /// Suppress everything.
    pub const OFF: Level = Level(6);

    /// Every level the adapter knows how to map.
    pub const KNOWN: [Level; 7] = [
        Level::TRACE,
        Level::DEBUG,
        Level::INFO,
        Level::WARN,
        Level::ERROR,
        Level::NO_LEVEL,
        Level::OFF,
    ];

    /// Wrap a raw level value, known or not.
    pub const fn from_raw(value: i32) -> Self {
        Self(value)
    }

    /// The raw numeric value.
    pub const fn as_raw(self) -> i32 {
        self.0
    }

    /// Whether this value is one of [`Level::KNOWN`].
    pub fn is_known(self) -> bool {
        Self::KNOWN.contains(&self)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            Level::TRACE => "trace",
            Level::DEBUG => "debug",
            Level::INFO => "info",
            Level::WARN => "warn",
            Level::ERROR => "error",
            Level::NO_LEVEL => "none",
            Level::OFF => "off",
            _ => "unknown",
        };
        f.write_str(name)
    }
}

impl FromStr for Level {
    type Err = AdapterError;

    /// Parse a level name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Level::TRACE),
            "debug" => Ok(Level::DEBUG),
            "info" => Ok(Level::INFO),
            "warn" => Ok(Level::WARN),
            "error" => Ok(Level::ERROR),
            "off" => Ok(Level::OFF),
            "none" => Ok(Level::NO_LEVEL),
            _ => Err(AdapterError::unknown_level(s)),
        }
    }
}

impl TryFrom<String> for Level {
    type Error = AdapterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Level> for String {
    fn from(level: Level) -> Self {
        level.to_string()
    }
}

/// Map a named-logger level onto the engine level it is emitted and filtered at.
///
/// Returns `None` for values outside [`Level::KNOWN`].
pub fn engine_level_for(level: Level) -> Option<EngineLevel> {
    match level {
        Level::TRACE => Some(EngineLevel::TRACE),
        Level::DEBUG => Some(EngineLevel::DEBUG),
        Level::INFO => Some(EngineLevel::INFO),
        Level::WARN => Some(EngineLevel::WARN),
        Level::ERROR => Some(EngineLevel::ERROR),
        Level::NO_LEVEL => Some(EngineLevel::NO_LEVEL),
        Level::OFF => Some(EngineLevel::DISABLED),
        _ => None,
    }
}

/// Map an engine level back onto the named-logger level.
///
/// Fatal and panic collapse to [`Level::ERROR`]. Returns `None` for engine
/// values outside the nine known variants.
pub fn level_for(level: EngineLevel) -> Option<Level> {
    match level {
        EngineLevel::TRACE => Some(Level::TRACE),
        EngineLevel::DEBUG => Some(Level::DEBUG),
        EngineLevel::INFO => Some(Level::INFO),
        EngineLevel::WARN => Some(Level::WARN),
        EngineLevel::ERROR | EngineLevel::FATAL | EngineLevel::PANIC => Some(Level::ERROR),
        EngineLevel::DISABLED => Some(Level::OFF),
        EngineLevel::NO_LEVEL => Some(Level::NO_LEVEL),
        _ => None,
    }
}
