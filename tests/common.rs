//! Test helper utilities for named-log-bridge integration tests
//!
//! This module provides reusable sinks and record parsing helpers
//! that are shared across multiple test files.
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use named_log_bridge::{Adapter, JsonLogger, StructuredLogger};
use serde_json::Value;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// In-memory sink shared between the engine and the test.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    pub fn contents(&self) -> String {
        String::from_utf8(self.bytes.lock().unwrap().clone()).expect("sink holds UTF-8")
    }

    /// Every record written so far, parsed.
    ///
    /// # Panics
    ///
    /// Panics if any line is not valid JSON (test failure is appropriate).
    pub fn records(&self) -> Vec<Value> {
        self.contents()
            .lines()
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|_| panic!("Expected log output to be valid JSON, got: {line}"))
            })
            .collect()
    }
}

impl Write for MemorySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Create an adapter over a JSON engine tagged the way a host application
/// would tag a subsystem logger.
pub fn create_component_adapter(component: &str) -> (Adapter, MemorySink) {
    let sink = MemorySink::default();
    let engine = JsonLogger::new(sink.clone()).with_str("component", component);
    (Adapter::new(engine), sink)
}

/// String value of `key`, empty when missing.
pub fn field<'a>(record: &'a Value, key: &str) -> &'a str {
    record.get(key).and_then(Value::as_str).unwrap_or("")
}
