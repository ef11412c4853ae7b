//! File-backed NotificationRepository.
//!
//! File location: `{data_dir}/notifications/{id}.json`

use async_trait::async_trait;
use std::path::Path;
use version_migrate::Migrator;

use dreamclerk_core::error::{DreamclerkError, Result};
use dreamclerk_core::notification::{NotificationRecord, NotificationRepository};

use crate::dto::create_notification_migrator;
use crate::json_store::JsonDocumentStore;
use crate::paths::{Collection, DreamclerkPaths};

const ENTITY_NAME: &str = "notification";

pub struct FileNotificationRepository {
    store: JsonDocumentStore,
    migrator: Migrator,
}

impl FileNotificationRepository {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            store: JsonDocumentStore::new(DreamclerkPaths::collection_dir(
                data_dir,
                Collection::Notifications,
            )),
            migrator: create_notification_migrator(),
        }
    }

    fn decode(&self, value: serde_json::Value) -> Result<NotificationRecord> {
        self.migrator
            .load_flat_from(ENTITY_NAME, value)
            .map_err(|e| DreamclerkError::migration(format!("Failed to load notification: {}", e)))
    }
}

#[async_trait]
impl NotificationRepository for FileNotificationRepository {
    async fn save(&self, notification: &NotificationRecord) -> Result<()> {
        let serialized = self
            .migrator
            .save_domain_flat(ENTITY_NAME, notification.clone())
            .map_err(|e| {
                DreamclerkError::data_access(format!("Failed to serialize notification: {}", e))
            })?;
        self.store.write(&notification.id, &serialized).await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<NotificationRecord>> {
        match self.store.read(id).await? {
            Some(value) => Ok(Some(self.decode(value)?)),
            None => Ok(None),
        }
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<NotificationRecord>> {
        let mut notifications = Vec::new();
        for (_, value) in self.store.read_all().await? {
            let notification = self.decode(value)?;
            if notification.user_id == user_id {
                notifications.push(notification);
            }
        }

        // Most recent first
        notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(notifications)
    }
}
