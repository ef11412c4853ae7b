//! File-backed UserRepository.
//!
//! File location: `{data_dir}/users/{id}.json`

use async_trait::async_trait;
use std::path::Path;
use version_migrate::Migrator;

use dreamclerk_core::error::{DreamclerkError, Result};
use dreamclerk_core::user::{UserRecord, UserRepository};

use crate::dto::create_user_record_migrator;
use crate::json_store::JsonDocumentStore;
use crate::paths::{Collection, DreamclerkPaths};

const ENTITY_NAME: &str = "user_record";

/// User repository storing one versioned JSON document per user.
pub struct FileUserRepository {
    store: JsonDocumentStore,
    migrator: Migrator,
}

impl FileUserRepository {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            store: JsonDocumentStore::new(DreamclerkPaths::collection_dir(
                data_dir,
                Collection::Users,
            )),
            migrator: create_user_record_migrator(),
        }
    }

    fn decode(&self, value: serde_json::Value) -> Result<UserRecord> {
        self.migrator
            .load_flat_from(ENTITY_NAME, value)
            .map_err(|e| DreamclerkError::migration(format!("Failed to load user record: {}", e)))
    }
}

#[async_trait]
impl UserRepository for FileUserRepository {
    async fn find_by_id(&self, user_id: &str) -> Result<Option<UserRecord>> {
        match self.store.read(user_id).await? {
            Some(value) => Ok(Some(self.decode(value)?)),
            None => Ok(None),
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>> {
        let wanted = email.trim().to_lowercase();
        Ok(self.list_all().await?.into_iter().find(|user| {
            user.email
                .as_deref()
                .is_some_and(|e| e.trim().to_lowercase() == wanted)
        }))
    }

    async fn save(&self, user: &UserRecord) -> Result<()> {
        let serialized = self
            .migrator
            .save_domain_flat(ENTITY_NAME, user.clone())
            .map_err(|e| DreamclerkError::data_access(format!("Failed to serialize user: {}", e)))?;
        self.store.write(&user.id, &serialized).await
    }

    async fn delete(&self, user_id: &str) -> Result<()> {
        self.store
            .delete(user_id)
            .await
            .map_err(|e| DreamclerkError::data_access(format!("Failed to delete user: {}", e)))
    }

    async fn list_all(&self) -> Result<Vec<UserRecord>> {
        let mut users = Vec::new();
        for (_, value) in self.store.read_all().await? {
            users.push(self.decode(value)?);
        }
        users.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(users)
    }
}
