//! Console Logger
//!
//! A `log` backend for browser apps. Records go to the browser console using
//! the method that matches their level, and the most recent ones are kept in a
//! circular buffer so they can be inspected after the fact.

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of records kept in the buffer
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Logger configuration
#[derive(Debug, Clone, Copy)]
pub struct Config {
    pub level: LevelFilter,
    pub capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
            capacity: DEFAULT_CAPACITY,
        }
    }
}

/// One formatted log record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl LogLine {
    fn from_record(record: &Record) -> Self {
        Self {
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        }
    }
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}] {}", self.level, self.target, self.message)
    }
}

/// Fixed-capacity buffer that drops the oldest line when full
#[derive(Debug)]
pub struct RingBuffer {
    lines: VecDeque<LogLine>,
    capacity: usize,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, line: LogLine) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    /// Buffered lines, oldest first
    pub fn snapshot(&self) -> Vec<LogLine> {
        self.lines.iter().cloned().collect()
    }
}

/// Browser console logger
pub struct ConsoleLogger {
    level: LevelFilter,
    buffer: Mutex<RingBuffer>,
}

impl ConsoleLogger {
    pub fn new(config: Config) -> Self {
        Self {
            level: config.level,
            buffer: Mutex::new(RingBuffer::new(config.capacity)),
        }
    }

    pub fn snapshot(&self) -> Vec<LogLine> {
        self.buffer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .snapshot()
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = LogLine::from_record(record);
        write_console(&line);
        self.buffer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_console(line: &LogLine) {
    use web_sys::console;

    let text = wasm_bindgen::JsValue::from_str(&line.to_string());
    match line.level {
        Level::Error => console::error_1(&text),
        Level::Warn => console::warn_1(&text),
        Level::Info => console::info_1(&text),
        Level::Debug | Level::Trace => console::debug_1(&text),
    }
}

// No console outside the browser; records only land in the buffer.
#[cfg(not(target_arch = "wasm32"))]
fn write_console(_line: &LogLine) {}

/// Install the global logger. Calling it again is a no-op.
pub fn init(config: Config) -> Result<(), SetLoggerError> {
    if LOGGER.get().is_some() {
        return Ok(());
    }
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(config));
    log::set_logger(logger)?;
    log::set_max_level(config.level);
    Ok(())
}

/// Recent records from the global logger, oldest first
pub fn recent() -> Vec<LogLine> {
    LOGGER.get().map(ConsoleLogger::snapshot).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(message: &str) -> LogLine {
        LogLine {
            level: Level::Info,
            target: "test".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_ring_buffer_evicts_oldest() {
        let mut buffer = RingBuffer::new(2);
        buffer.push(line("a"));
        buffer.push(line("b"));
        buffer.push(line("c"));

        let lines = buffer.snapshot();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].message, "b");
        assert_eq!(lines[1].message, "c");
    }

    #[test]
    fn test_zero_capacity_keeps_one() {
        let mut buffer = RingBuffer::new(0);
        assert!(buffer.snapshot().is_empty());
        buffer.push(line("a"));
        buffer.push(line("b"));

        let lines = buffer.snapshot();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].message, "b");
    }

    #[test]
    fn test_logger_filters_by_level() {
        let logger = ConsoleLogger::new(Config {
            level: LevelFilter::Warn,
            capacity: 8,
        });

        logger.log(
            &Record::builder()
                .level(Level::Info)
                .target("app")
                .args(format_args!("ignored"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(Level::Error)
                .target("app")
                .args(format_args!("fetch failed: {}", 500))
                .build(),
        );

        let lines = logger.snapshot();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].level, Level::Error);
        assert_eq!(lines[0].to_string(), "[ERROR app] fetch failed: 500");
    }
}
