//! Rolling Logger
//!
//! A `log` backend that keeps the most recent records in a circular buffer
//! and forwards every record to a [`Sink`] (the browser console in the UI).

use std::collections::VecDeque;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Destination for formatted log lines
pub trait Sink: Send + Sync {
    fn write(&self, level: Level, line: &str);
}

/// Sink that drops everything; only the ring buffer is kept
pub struct NullSink;

impl Sink for NullSink {
    fn write(&self, _level: Level, _line: &str) {}
}

pub struct RollingLogger {
    capacity: usize,
    level: LevelFilter,
    buffer: Mutex<VecDeque<String>>,
    sink: Box<dyn Sink>,
}

impl RollingLogger {
    pub fn new(capacity: usize, level: LevelFilter, sink: impl Sink + 'static) -> Self {
        Self {
            capacity: capacity.max(1),
            level,
            buffer: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
            sink: Box::new(sink),
        }
    }

    /// Install as the global logger. Returns the installed instance so callers
    /// can read back recent records.
    pub fn init(self) -> Result<&'static RollingLogger, SetLoggerError> {
        let logger: &'static RollingLogger = Box::leak(Box::new(self));
        log::set_logger(logger)?;
        log::set_max_level(logger.level);
        Ok(logger)
    }

    /// Buffered lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        self.buffer
            .lock()
            .map(|buffer| buffer.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn push(&self, line: String) {
        if let Ok(mut buffer) = self.buffer.lock() {
            if buffer.len() == self.capacity {
                buffer.pop_front();
            }
            buffer.push_back(line);
        }
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record, &chrono::Utc::now().format("%H:%M:%S%.3f").to_string());
        self.sink.write(record.level(), &line);
        self.push(line);
    }

    fn flush(&self) {}
}

/// `[12:00:00.000 INFO target] message`
pub fn format_record(record: &Record, timestamp: &str) -> String {
    format!(
        "[{} {} {}] {}",
        timestamp,
        record.level(),
        record.target(),
        record.args()
    )
}
