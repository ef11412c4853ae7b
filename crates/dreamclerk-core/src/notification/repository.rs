//! Notification repository trait.

use async_trait::async_trait;

use super::model::NotificationRecord;
use crate::error::Result;

/// Persistence for the notifications table.
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Inserts or replaces a notification.
    async fn save(&self, notification: &NotificationRecord) -> Result<()>;

    /// Finds a notification by id.
    async fn find_by_id(&self, id: &str) -> Result<Option<NotificationRecord>>;

    /// Lists a user's notifications, newest first.
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<NotificationRecord>>;
}
