//! Logger service.
//!
//! Plugins write log entries through the [`Logger`] trait; the host forwards
//! them to its log file. [`TracingLogger`] bridges entries into `tracing`,
//! [`BufferedLogger`] keeps them in memory for inspection.

use crate::core::{now, Timestamp};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, VecDeque};
use std::sync::RwLock;

/// Log level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    /// Trace level (most verbose)
    Trace = 0,
    /// Debug level
    Debug = 1,
    /// Info level
    Info = 2,
    /// Warning level
    Warn = 3,
    /// Error level
    Error = 4,
    /// Fatal level
    Fatal = 5,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Fatal => write!(f, "FATAL"),
        }
    }
}

/// A log entry written by a plugin.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LogEntry {
    /// Timestamp
    pub timestamp: Timestamp,
    /// Log level
    pub level: LogLevel,
    /// Message
    pub message: String,
    /// Target (plugin or module name)
    pub target: String,
    /// Structured fields
    pub fields: BTreeMap<String, serde_json::Value>,
}

impl LogEntry {
    /// Create a new log entry.
    pub fn new(level: LogLevel, message: &str) -> Self {
        Self {
            timestamp: now(),
            level,
            message: message.to_string(),
            target: String::new(),
            fields: BTreeMap::new(),
        }
    }

    /// Set target.
    pub fn with_target(mut self, target: &str) -> Self {
        self.target = target.to_string();
        self
    }

    /// Add a field. Values that cannot be serialized are skipped.
    pub fn with_field(mut self, key: &str, value: impl Serialize) -> Self {
        if let Ok(v) = serde_json::to_value(value) {
            self.fields.insert(key.to_string(), v);
        }
        self
    }

    /// Format as text.
    pub fn to_text(&self) -> String {
        let fields_str = if self.fields.is_empty() {
            String::new()
        } else {
            let fields: Vec<String> = self
                .fields
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            format!(" {}", fields.join(" "))
        };

        format!(
            "{} {} [{}] {}{}",
            self.timestamp.to_rfc3339(),
            self.level,
            self.target,
            self.message,
            fields_str
        )
    }
}

/// Write-only sink for log entries.
pub trait Logger: Send + Sync {
    /// Write an entry.
    fn log(&self, entry: LogEntry);

    /// Log at trace level.
    fn trace(&self, message: &str) {
        self.log(LogEntry::new(LogLevel::Trace, message));
    }

    /// Log at debug level.
    fn debug(&self, message: &str) {
        self.log(LogEntry::new(LogLevel::Debug, message));
    }

    /// Log at info level.
    fn info(&self, message: &str) {
        self.log(LogEntry::new(LogLevel::Info, message));
    }

    /// Log at warn level.
    fn warn(&self, message: &str) {
        self.log(LogEntry::new(LogLevel::Warn, message));
    }

    /// Log at error level.
    fn error(&self, message: &str) {
        self.log(LogEntry::new(LogLevel::Error, message));
    }
}

/// Forwards entries to the active `tracing` subscriber.
#[derive(Clone, Debug, Default)]
pub struct TracingLogger {
    target: String,
}

impl TracingLogger {
    /// Create a logger that tags entries without target with `target`.
    pub fn new(target: &str) -> Self {
        Self {
            target: target.to_string(),
        }
    }
}

impl Logger for TracingLogger {
    fn log(&self, entry: LogEntry) {
        let target = if entry.target.is_empty() {
            self.target.as_str()
        } else {
            entry.target.as_str()
        };
        let fields = serde_json::Value::Object(entry.fields.into_iter().collect());

        match entry.level {
            LogLevel::Trace => tracing::trace!(plugin = target, %fields, "{}", entry.message),
            LogLevel::Debug => tracing::debug!(plugin = target, %fields, "{}", entry.message),
            LogLevel::Info => tracing::info!(plugin = target, %fields, "{}", entry.message),
            LogLevel::Warn => tracing::warn!(plugin = target, %fields, "{}", entry.message),
            LogLevel::Error | LogLevel::Fatal => {
                tracing::error!(plugin = target, level = %entry.level, %fields, "{}", entry.message)
            }
        }
    }
}

/// Configuration of a [`BufferedLogger`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Minimum log level
    pub level: LogLevel,
    /// Maximum number of buffered entries
    pub capacity: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            capacity: 1000,
        }
    }
}

/// Keeps the most recent entries in memory.
pub struct BufferedLogger {
    config: LoggerConfig,
    buffer: RwLock<VecDeque<LogEntry>>,
}

impl BufferedLogger {
    /// Create a new logger.
    pub fn new(config: LoggerConfig) -> Self {
        Self {
            config,
            buffer: RwLock::new(VecDeque::new()),
        }
    }

    /// Get buffered entries, oldest first.
    pub fn entries(&self) -> Vec<LogEntry> {
        let buffer = self.buffer.read().unwrap_or_else(|e| e.into_inner());
        buffer.iter().cloned().collect()
    }

    /// Get entries at or above a level.
    pub fn entries_at_level(&self, min_level: LogLevel) -> Vec<LogEntry> {
        let buffer = self.buffer.read().unwrap_or_else(|e| e.into_inner());
        buffer
            .iter()
            .filter(|e| e.level >= min_level)
            .cloned()
            .collect()
    }

    /// Clear the buffer.
    pub fn clear(&self) {
        self.buffer
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
}

impl Default for BufferedLogger {
    fn default() -> Self {
        Self::new(LoggerConfig::default())
    }
}

impl Logger for BufferedLogger {
    fn log(&self, entry: LogEntry) {
        if entry.level < self.config.level || self.config.capacity == 0 {
            return;
        }

        let mut buffer = self.buffer.write().unwrap_or_else(|e| e.into_inner());
        if buffer.len() >= self.config.capacity {
            buffer.pop_front();
        }
        buffer.push_back(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_entry() {
        let entry = LogEntry::new(LogLevel::Info, "Imported file")
            .with_target("csv-importer")
            .with_field("file", "parts.csv");

        assert_eq!(entry.level, LogLevel::Info);
        assert_eq!(entry.target, "csv-importer");
        assert!(entry.fields.contains_key("file"));

        let text = entry.to_text();
        assert!(text.contains("INFO [csv-importer] Imported file"));
        assert!(text.contains("file=\"parts.csv\""));
    }

    #[test]
    fn test_buffered_logger() {
        let logger = BufferedLogger::default();
        logger.info("Info message");
        logger.warn("Warning message");
        logger.error("Error message");

        assert_eq!(logger.entries().len(), 3);
        logger.clear();
        assert!(logger.entries().is_empty());
    }

    #[test]
    fn test_level_filtering() {
        let logger = BufferedLogger::new(LoggerConfig {
            level: LogLevel::Warn,
            ..Default::default()
        });

        logger.debug("Should be filtered");
        logger.info("Should be filtered");
        logger.warn("Should appear");
        logger.error("Should appear");

        assert_eq!(logger.entries().len(), 2);
        assert_eq!(logger.entries_at_level(LogLevel::Error).len(), 1);
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let logger = BufferedLogger::new(LoggerConfig {
            level: LogLevel::Trace,
            capacity: 2,
        });
        logger.info("first");
        logger.info("second");
        logger.info("third");

        let messages: Vec<String> = logger.entries().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["second", "third"]);
    }

    #[test]
    fn test_tracing_logger_accepts_all_levels() {
        let logger = TracingLogger::new("test-plugin");
        logger.trace("trace");
        logger.debug("debug");
        logger.info("info");
        logger.warn("warn");
        logger.error("error");
        logger.log(LogEntry::new(LogLevel::Fatal, "fatal").with_field("code", 7));
    }

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Trace < LogLevel::Debug);
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::Fatal);
    }
}
