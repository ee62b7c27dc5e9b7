// Unit Tests for Standard-Stream Shims
//
// UNIT UNDER TEST: StandardLogger, StandardLoggerOptions
//
// BUSINESS RESPONSIBILITY:
//   - Writes one newline-terminated line per call with no prefix or timestamp
//   - Surfaces sink failures as adapter errors
//
// TEST COVERAGE:
//   - print, println and write_line output
//   - Newline handling
//   - Error propagation from a failing sink

use crate::error::AdapterError;
use crate::standard::{StandardLogger, StandardLoggerOptions};
use crate::tests::helpers::SharedBuffer;
use std::io::{self, Write};

struct BrokenSink;

impl Write for BrokenSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod standard_logger_tests {
    use super::*;

    fn logger() -> (StandardLogger, SharedBuffer) {
        let buffer = SharedBuffer::new();
        (StandardLogger::new(Box::new(buffer.clone())), buffer)
    }

    #[test]
    fn test_print_appends_missing_newline() {
        let (mut logger, buffer) = logger();
        logger.print(format_args!("term {}", 3)).unwrap();
        assert_eq!(buffer.contents(), "term 3\n");
    }

    #[test]
    fn test_print_keeps_existing_newline() {
        let (mut logger, buffer) = logger();
        logger.print(format_args!("done\n")).unwrap();
        assert_eq!(buffer.contents(), "done\n");
    }

    #[test]
    fn test_println_always_terminates() {
        let (mut logger, buffer) = logger();
        logger.println(format_args!("a")).unwrap();
        logger.println(format_args!("b")).unwrap();
        assert_eq!(buffer.contents(), "a\nb\n");
    }

    #[test]
    fn test_write_line_has_no_prefix() {
        let (mut logger, buffer) = logger();
        logger.write_line("plain").unwrap();
        assert_eq!(buffer.contents(), "plain\n");
    }

    #[test]
    fn test_sink_failure_is_reported() {
        let mut logger = StandardLogger::new(Box::new(BrokenSink));
        let result = logger.write_line("lost");
        assert!(matches!(result, Err(AdapterError::Io(_))));
    }

    #[test]
    fn test_into_inner_returns_sink() {
        let (logger, buffer) = logger();
        let mut sink = logger.into_inner();
        sink.write_all(b"direct").unwrap();
        assert_eq!(buffer.contents(), "direct");
    }

    #[test]
    fn test_default_options() {
        let options = StandardLoggerOptions::default();
        assert!(!options.infer_levels);
        assert!(!options.infer_levels_exact);
        assert_eq!(options.force_level, None);
    }
}
