//! Notification domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;

/// Severity shown as the notification's icon and colour.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// A notification addressed to one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRecord {
    pub id: String,
    pub user_id: String,
    pub message: String,
    pub kind: NotificationKind,
    #[serde(default)]
    pub read: bool,
    /// Optional in-app link (e.g. `/dashboard/profile`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl NotificationRecord {
    /// Creates an unread notification with a generated id.
    pub fn new(
        user_id: impl Into<String>,
        message: impl Into<String>,
        kind: NotificationKind,
        link: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            message: message.into(),
            kind,
            read: false,
            link,
            created_at: Utc::now(),
        }
    }
}

/// An item on the notifications change stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NotificationEvent {
    /// A notification was inserted.
    Created { notification: NotificationRecord },
    /// A single notification was marked read.
    Read { id: String, user_id: String },
    /// Unread notifications of a user were marked read in bulk; `count` is
    /// how many changed.
    AllRead { user_id: String, count: usize },
}

impl NotificationEvent {
    /// The user the event concerns, for per-user filtering of the stream.
    pub fn user_id(&self) -> &str {
        match self {
            Self::Created { notification } => &notification.user_id,
            Self::Read { user_id, .. } | Self::AllRead { user_id, .. } => user_id,
        }
    }
}
