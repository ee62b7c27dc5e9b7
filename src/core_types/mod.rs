//! Core types shared by the adapter and the engines
//!
//! ## Organization
//! - `level` - Source-side severity levels and the mapping table to engine levels
//! - `fields` - Translation of positional key/value argument lists into fields

pub mod fields;
pub mod level;

// Re-export commonly used types
pub use fields::{pair_args, Field, Fields};
pub use level::{engine_level_for, level_for, Level};
