/// User-facing notifications
use serde::{Deserialize, Serialize};

/// Severity of a user-facing notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational (e.g. autoplay blocked)
    Info,
    /// Confirmation of a user action (e.g. track queued)
    Success,
    /// Something went wrong but playback continues
    Error,
}

/// A message for the notification sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Text shown to the user
    pub message: String,
    /// How the sink should style the message
    pub severity: Severity,
}

impl Notification {
    /// Create a notification
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    /// Create an informational notification
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info)
    }

    /// Create a success notification
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    /// Create an error notification
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }
}
