//! # Transient Notifications
//!
//! The single toast channel every user-visible outcome goes through.
//! Successes and failures differ only by severity; the renderer
//! auto-dismisses after [`NOTICE_DISMISS_AFTER`](crate::state::NOTICE_DISMISS_AFTER).

use serde::{Deserialize, Serialize};

/// Styling flag for a notice. Informational notices get the success
/// styling, errors the error styling; nothing else distinguishes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Error,
}

/// A transient user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    /// An informational notice (success styling).
    pub fn info(message: impl Into<String>) -> Self {
        Notice {
            message: message.into(),
            severity: Severity::Info,
        }
    }

    /// An error notice.
    pub fn error(message: impl Into<String>) -> Self {
        Notice {
            message: message.into(),
            severity: Severity::Error,
        }
    }
}
