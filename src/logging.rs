//! Logging utilities for named-log-bridge
//!
//! Re-exports tracing macros with log_* naming convention for consistency.
//! These carry the crate's own diagnostics and back [`TracingLogger`](crate::engine::TracingLogger).

// Re-export tracing macros with log_* naming
pub use tracing::{
    debug as log_debug,
    error as log_error,
    info as log_info,
    trace as log_trace,
    warn as log_warn,
};
