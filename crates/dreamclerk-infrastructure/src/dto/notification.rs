//! Notification DTOs
//!
//! ## Version History
//! - **1.0.0**: Initial schema

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use version_migrate::{FromDomain, IntoDomain, Versioned};

use dreamclerk_core::notification::{NotificationKind, NotificationRecord};

/// Notification kind DTO matching domain model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKindDTO {
    Info,
    Success,
    Warning,
    Error,
}

impl From<NotificationKindDTO> for NotificationKind {
    fn from(dto: NotificationKindDTO) -> Self {
        match dto {
            NotificationKindDTO::Info => NotificationKind::Info,
            NotificationKindDTO::Success => NotificationKind::Success,
            NotificationKindDTO::Warning => NotificationKind::Warning,
            NotificationKindDTO::Error => NotificationKind::Error,
        }
    }
}

impl From<NotificationKind> for NotificationKindDTO {
    fn from(kind: NotificationKind) -> Self {
        match kind {
            NotificationKind::Info => NotificationKindDTO::Info,
            NotificationKind::Success => NotificationKindDTO::Success,
            NotificationKind::Warning => NotificationKindDTO::Warning,
            NotificationKind::Error => NotificationKindDTO::Error,
        }
    }
}

/// Notification DTO V1.0.0
#[derive(Debug, Clone, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.0.0")]
#[serde(rename_all = "camelCase")]
pub struct NotificationV1_0_0 {
    pub id: String,
    pub user_id: String,
    pub message: String,
    pub kind: NotificationKindDTO,
    #[serde(default)]
    pub read: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl IntoDomain<NotificationRecord> for NotificationV1_0_0 {
    fn into_domain(self) -> NotificationRecord {
        NotificationRecord {
            id: self.id,
            user_id: self.user_id,
            message: self.message,
            kind: self.kind.into(),
            read: self.read,
            link: self.link,
            created_at: self.created_at,
        }
    }
}

impl FromDomain<NotificationRecord> for NotificationV1_0_0 {
    fn from_domain(notification: NotificationRecord) -> Self {
        NotificationV1_0_0 {
            id: notification.id,
            user_id: notification.user_id,
            message: notification.message,
            kind: notification.kind.into(),
            read: notification.read,
            link: notification.link,
            created_at: notification.created_at,
        }
    }
}

/// Creates a Migrator for NotificationRecord entities.
pub fn create_notification_migrator() -> version_migrate::Migrator {
    version_migrate::migrator!("notification" => [NotificationV1_0_0, NotificationRecord], save = true)
        .expect("Failed to create notification migrator")
}
