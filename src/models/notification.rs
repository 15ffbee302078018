//! Notifications and the exception chains they carry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a module notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum NotificationSeverity {
    Info,
    Warning,
    Error,
    Unknown(i32),
}

impl From<i32> for NotificationSeverity {
    fn from(value: i32) -> Self {
        match value {
            0 => Self::Info,
            1 => Self::Warning,
            2 => Self::Error,
            other => Self::Unknown(other),
        }
    }
}

impl From<NotificationSeverity> for i32 {
    fn from(severity: NotificationSeverity) -> Self {
        match severity {
            NotificationSeverity::Info => 0,
            NotificationSeverity::Warning => 1,
            NotificationSeverity::Error => 2,
            NotificationSeverity::Unknown(other) => other,
        }
    }
}

impl fmt::Display for NotificationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "Info"),
            Self::Warning => write!(f, "Warning"),
            Self::Error => write!(f, "Error"),
            Self::Unknown(value) => write!(f, "Unknown({value})"),
        }
    }
}

/// Exception recorded by the host, linked to the exception it wraps.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SerializableException {
    pub exception_type_name: String,
    pub message: String,
    pub stack_trace: String,
    pub inner_exception: Option<Box<SerializableException>>,
}

impl SerializableException {
    /// Walk the exception and everything it wraps, outermost first.
    pub fn chain(&self) -> ExceptionChain<'_> {
        ExceptionChain { next: Some(self) }
    }

    /// Exceptions wrapped by this one, outermost first.
    pub fn inner_chain(&self) -> ExceptionChain<'_> {
        ExceptionChain {
            next: self.inner_exception.as_deref(),
        }
    }
}

/// Iterator over a linked exception chain.
pub struct ExceptionChain<'a> {
    next: Option<&'a SerializableException>,
}

impl<'a> Iterator for ExceptionChain<'a> {
    type Item = &'a SerializableException;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.inner_exception.as_deref();
        Some(current)
    }
}

/// A warning or error event attached to a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(rename = "NotificationType")]
    pub severity: NotificationSeverity,
    #[serde(rename = "Exception", default)]
    pub exception: SerializableException,
}
