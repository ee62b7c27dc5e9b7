// Test modules for named-log-bridge crate
//
// Test organization follows the template pattern where each source file
// has a corresponding test file that focuses on behaviour verification.

// Test helper utilities (in-memory sinks and record parsing)
pub mod helpers;

pub mod standard;
