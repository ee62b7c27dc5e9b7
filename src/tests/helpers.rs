//! Test helper utilities for named-log-bridge unit tests
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use crate::engine::JsonLogger;
use serde_json::Value;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// In-memory sink shared between a logger and the test that inspects it.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, as text.
    pub fn contents(&self) -> String {
        String::from_utf8(self.bytes.lock().unwrap().clone()).expect("sink holds UTF-8")
    }

    /// Every JSON record written so far.
    pub fn records(&self) -> Vec<Value> {
        self.contents()
            .lines()
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|_| panic!("Expected log output to be valid JSON, got: {line}"))
            })
            .collect()
    }

    /// The only record written so far.
    ///
    /// # Panics
    ///
    /// Panics unless exactly one record was written.
    pub fn single_record(&self) -> Value {
        let mut records = self.records();
        assert_eq!(
            records.len(),
            1,
            "expected exactly one record, got: {}",
            self.contents()
        );
        records.remove(0)
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.lock().unwrap().is_empty()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A JSON engine writing into a fresh buffer.
pub fn json_logger() -> (JsonLogger, SharedBuffer) {
    let buffer = SharedBuffer::new();
    (JsonLogger::new(buffer.clone()), buffer)
}

/// Read a string field, treating a missing key as the empty string.
pub fn str_field<'a>(record: &'a Value, key: &str) -> &'a str {
    record.get(key).and_then(Value::as_str).unwrap_or("")
}
