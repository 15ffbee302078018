//! Logger configuration reported by the log maintenance endpoint.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::InvalidEnumValue;

/// Level a host logger is currently writing at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warning,
    Error,
    Fatal,
}

impl LogLevel {
    /// One step more verbose, saturating at `Trace`.
    #[must_use]
    pub fn more_verbose(self) -> Self {
        match self {
            Self::Trace | Self::Debug => Self::Trace,
            Self::Info => Self::Debug,
            Self::Warning => Self::Info,
            Self::Error => Self::Warning,
            Self::Fatal => Self::Error,
        }
    }

    /// One step less verbose, saturating at `Fatal`.
    #[must_use]
    pub fn less_verbose(self) -> Self {
        match self {
            Self::Trace => Self::Debug,
            Self::Debug => Self::Info,
            Self::Info => Self::Warning,
            Self::Warning => Self::Error,
            Self::Error | Self::Fatal => Self::Fatal,
        }
    }
}

impl TryFrom<i32> for LogLevel {
    type Error = InvalidEnumValue;

    fn try_from(value: i32) -> Result<Self, InvalidEnumValue> {
        match value {
            0 => Ok(LogLevel::Trace),
            1 => Ok(LogLevel::Debug),
            2 => Ok(LogLevel::Info),
            3 => Ok(LogLevel::Warning),
            4 => Ok(LogLevel::Error),
            5 => Ok(LogLevel::Fatal),
            other => Err(InvalidEnumValue::new("LogLevel", other)),
        }
    }
}

impl From<LogLevel> for i32 {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => 0,
            LogLevel::Debug => 1,
            LogLevel::Info => 2,
            LogLevel::Warning => 3,
            LogLevel::Error => 4,
            LogLevel::Fatal => 5,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Trace => "Trace",
            Self::Debug => "Debug",
            Self::Info => "Info",
            Self::Warning => "Warning",
            Self::Error => "Error",
            Self::Fatal => "Fatal",
        };
        write!(f, "{label}")
    }
}

/// A named logger on the host, possibly with child loggers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoggerModel {
    pub name: String,
    pub active_level: LogLevel,
    #[serde(default)]
    pub child_loggers: Vec<LoggerModel>,
}

impl LoggerModel {
    /// Depth-first walk over this logger and its children, with nesting depth.
    #[must_use]
    pub fn flatten(&self) -> Vec<(usize, &LoggerModel)> {
        let mut flattened = Vec::new();
        let mut pending = vec![(0, self)];
        while let Some((depth, logger)) = pending.pop() {
            flattened.push((depth, logger));
            for child in logger.child_loggers.iter().rev() {
                pending.push((depth + 1, child));
            }
        }
        flattened
    }
}
