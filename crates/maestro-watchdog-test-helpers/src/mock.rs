//! Mock collaborators for watchdog tests.

use std::fmt;
use std::sync::Arc;

use maestro_watchdog::WatchdogLogger;
use parking_lot::Mutex;

/// Level a message was logged at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Error,
}

/// A single captured log message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: LogLevel,
    pub message: String,
}

/// `WatchdogLogger` that records every message for later inspection.
///
/// Cloning shares the underlying buffer, so a test can keep one handle and
/// pass another (as `Arc<dyn WatchdogLogger>`) to the watchdog.
#[derive(Debug, Clone, Default)]
pub struct RecordingLogger {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handle to hand to `Watchdog::setup`.
    pub fn shared(&self) -> Arc<dyn WatchdogLogger> {
        Arc::new(self.clone())
    }

    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.messages_at(LogLevel::Error)
    }

    pub fn debugs(&self) -> Vec<String> {
        self.messages_at(LogLevel::Debug)
    }

    /// Number of error messages containing `needle`.
    pub fn count_errors_containing(&self, needle: &str) -> usize {
        self.records
            .lock()
            .iter()
            .filter(|r| r.level == LogLevel::Error && r.message.contains(needle))
            .count()
    }

    pub fn has_error_containing(&self, needle: &str) -> bool {
        self.count_errors_containing(needle) > 0
    }

    pub fn has_debug_containing(&self, needle: &str) -> bool {
        self.records
            .lock()
            .iter()
            .any(|r| r.level == LogLevel::Debug && r.message.contains(needle))
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }

    fn messages_at(&self, level: LogLevel) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .filter(|r| r.level == level)
            .map(|r| r.message.clone())
            .collect()
    }

    fn push(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        self.records.lock().push(LogRecord {
            level,
            message: args.to_string(),
        });
    }
}

impl WatchdogLogger for RecordingLogger {
    fn debug(&self, args: fmt::Arguments<'_>) {
        self.push(LogLevel::Debug, args);
    }

    fn error(&self, args: fmt::Arguments<'_>) {
        self.push(LogLevel::Error, args);
    }
}
