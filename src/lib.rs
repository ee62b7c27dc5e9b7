//! # named-log-bridge
//!
//! A hierarchical, named, leveled logger interface ([`NamedLogger`]) implemented
//! on top of a flat key/value structured logging engine ([`StructuredLogger`]).
//!
//! ## Key Features
//!
//! - **Level mapping**: Explicit tables between named-logger levels and engine
//!   levels, including the engine's fatal, panic and disabled variants
//! - **Positional arguments**: `[k1, v1, k2, v2, ..]` argument lists become
//!   structured fields
//! - **Hierarchical names**: `named("a").named("b")` yields `a.b`, carried in a
//!   configurable context field on every record
//! - **Never fails**: Unknown levels are reported as error records, not errors
//! - **Engines**: JSON lines to any writer, or events on the `tracing` facade
//!
//! ## Example
//!
//! ```rust
//! use named_log_bridge::{args, Adapter, JsonLogger, Level, NamedLogger, StructuredLogger};
//!
//! let engine = JsonLogger::new(std::io::stderr()).with_str("component", "raft");
//! let mut logger = Adapter::new(engine);
//! logger.set_level(Level::INFO);
//!
//! let node = logger.named("node1");
//! node.info("entering follower state", &args!["term", 3]);
//! node.debug("suppressed at info", &[]);
//! ```

// Allow missing errors documentation - errors are self-documenting via type signatures
#![allow(clippy::missing_errors_doc)]

// Core types shared by the adapter and the engines
pub mod core_types;

// Logging utilities (re-exports tracing with log_* naming) - internal only
pub(crate) mod logging;

pub mod adapter;
pub mod config;
pub mod engine;
pub mod error;
pub mod logger;
pub mod standard;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use adapter::{Adapter, DEFAULT_NAME_FIELD};
pub use config::AdapterConfig;
pub use core_types::{engine_level_for, level_for, pair_args, Field, Fields, Level};
pub use engine::{EngineLevel, JsonLogger, StructuredLogger, TracingLogger, RESERVED_KEYS};
pub use error::{AdapterError, AdapterResult};
pub use logger::NamedLogger;
pub use standard::{StandardLogger, StandardLoggerOptions};

// Used by the `args!` macro
#[doc(hidden)]
pub mod __private {
    pub use serde_json;
}
