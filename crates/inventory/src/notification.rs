//! Transient user-facing notification.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stocktable_core::ValueObject;

/// How long a notification stays visible before the shell auto-clears it.
/// One clear may be pending at a time; raising a new notification cancels
/// the outstanding one and restarts the delay.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(3);

/// Notification severity; drives banner styling only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

/// Transient message shown in the banner until superseded or expired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub raised_at: DateTime<Utc>,
}

impl ValueObject for Notification {}

impl Notification {
    pub fn success(message: impl Into<String>, raised_at: DateTime<Utc>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Success,
            raised_at,
        }
    }

    pub fn error(message: impl Into<String>, raised_at: DateTime<Utc>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Error,
            raised_at,
        }
    }
}
