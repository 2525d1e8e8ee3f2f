//! Severity taxonomy, log records, and the in-memory collector

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed severity taxonomy for collected log entries.
///
/// Labels are stable; classification checks compare against them exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Emerg,
    Alert,
    Crit,
    Err,
    Warn,
    Notice,
    Info,
    Debug,
}

impl Severity {
    /// The fixed uppercase label, the exact string a display layer shows.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Emerg => "EMERG",
            Severity::Alert => "ALERT",
            Severity::Crit => "CRIT",
            Severity::Err => "ERR",
            Severity::Warn => "WARN",
            Severity::Notice => "NOTICE",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
        }
    }

    /// Syslog-style priority; 0 is the most severe.
    #[must_use]
    pub fn priority(self) -> u8 {
        match self {
            Severity::Emerg => 0,
            Severity::Alert => 1,
            Severity::Crit => 2,
            Severity::Err => 3,
            Severity::Warn => 4,
            Severity::Notice => 5,
            Severity::Info => 6,
            Severity::Debug => 7,
        }
    }

    /// Whether this entry is at least as severe as `floor`.
    #[must_use]
    pub fn at_least(self, floor: Severity) -> bool {
        self.priority() <= floor.priority()
    }

    /// Nearest taxonomy slot for a `tracing` level. `TRACE` has no slot of
    /// its own and classifies as `DEBUG`.
    #[must_use]
    pub fn from_level(level: tracing::Level) -> Self {
        match level {
            tracing::Level::ERROR => Severity::Err,
            tracing::Level::WARN => Severity::Warn,
            tracing::Level::INFO => Severity::Info,
            _ => Severity::Debug,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A label outside the fixed severity taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown severity label '{0}'")]
pub struct ParseSeverityError(String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, ParseSeverityError> {
        match s {
            "EMERG" => Ok(Severity::Emerg),
            "ALERT" => Ok(Severity::Alert),
            "CRIT" => Ok(Severity::Crit),
            "ERR" => Ok(Severity::Err),
            "WARN" => Ok(Severity::Warn),
            "NOTICE" => Ok(Severity::Notice),
            "INFO" => Ok(Severity::Info),
            "DEBUG" => Ok(Severity::Debug),
            other => Err(ParseSeverityError(other.to_owned())),
        }
    }
}

/// One collected log entry in display-ready form.
#[derive(Debug, Clone, Serialize)]
pub struct LogRecord {
    pub severity: Severity,
    pub target: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl LogRecord {
    /// Record stamped with the current time.
    #[must_use]
    pub fn new(severity: Severity, target: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            target: target.into(),
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Read side of a per-request log collector.
///
/// Collectors are shared read-only across reports; nothing here writes.
pub trait DebugLog: Send + Sync {
    /// Ordered snapshot of the collected entries, oldest first.
    fn records(&self) -> Vec<LogRecord>;
}

fn default_capacity() -> usize {
    512
}

/// Collector configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BufferLogConfig {
    /// Maximum retained records; the oldest are dropped first.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    /// Discard records less severe than this before buffering.
    #[serde(default)]
    pub min_severity: Option<Severity>,
}

impl Default for BufferLogConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            min_severity: None,
        }
    }
}

/// Bounded in-memory collector.
#[derive(Debug)]
pub struct BufferLog {
    records: Mutex<VecDeque<LogRecord>>,
    capacity: usize,
    min_severity: Option<Severity>,
}

impl BufferLog {
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&BufferLogConfig::default())
    }

    #[must_use]
    pub fn from_config(config: &BufferLogConfig) -> Self {
        Self {
            records: Mutex::new(VecDeque::new()),
            capacity: config.capacity,
            min_severity: config.min_severity,
        }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_config(&BufferLogConfig {
            capacity,
            min_severity: None,
        })
    }

    /// Append a record. Records below the severity floor are discarded;
    /// once the buffer is full the oldest record makes room.
    pub fn push(&self, record: LogRecord) {
        if self.capacity == 0 {
            return;
        }
        if let Some(floor) = self.min_severity {
            if !record.severity.at_least(floor) {
                return;
            }
        }

        let mut records = self.records.lock();
        while records.len() >= self.capacity {
            records.pop_front();
        }
        records.push_back(record);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl Default for BufferLog {
    fn default() -> Self {
        Self::new()
    }
}

impl DebugLog for BufferLog {
    fn records(&self) -> Vec<LogRecord> {
        self.records.lock().iter().cloned().collect()
    }
}
