//! File-backed CounterRepository.
//!
//! File locations:
//! - `{data_dir}/registrations/{user_id}.json`
//! - `{data_dir}/stats/{name}.json`

use async_trait::async_trait;
use std::path::Path;
use version_migrate::Migrator;

use dreamclerk_core::counter::{CounterRecord, CounterRepository, RegistrationEntry};
use dreamclerk_core::error::{DreamclerkError, Result};

use crate::dto::{create_counter_migrator, create_registration_migrator};
use crate::json_store::JsonDocumentStore;
use crate::paths::{Collection, DreamclerkPaths};

/// Registrations and stats stored as JSON documents.
pub struct FileCounterRepository {
    registrations: JsonDocumentStore,
    stats: JsonDocumentStore,
    registration_migrator: Migrator,
    counter_migrator: Migrator,
}

impl FileCounterRepository {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            registrations: JsonDocumentStore::new(DreamclerkPaths::collection_dir(
                data_dir,
                Collection::Registrations,
            )),
            stats: JsonDocumentStore::new(DreamclerkPaths::collection_dir(
                data_dir,
                Collection::Stats,
            )),
            registration_migrator: create_registration_migrator(),
            counter_migrator: create_counter_migrator(),
        }
    }
}

#[async_trait]
impl CounterRepository for FileCounterRepository {
    async fn record_registration(&self, entry: &RegistrationEntry) -> Result<()> {
        let serialized = self
            .registration_migrator
            .save_domain_flat("registration", entry.clone())
            .map_err(|e| {
                DreamclerkError::data_access(format!("Failed to serialize registration: {}", e))
            })?;
        self.registrations.write(&entry.user_id, &serialized).await
    }

    async fn count_registrations(&self) -> Result<u64> {
        self.registrations.count().await
    }

    async fn load_stats(&self, name: &str) -> Result<Option<CounterRecord>> {
        let Some(value) = self.stats.read(name).await? else {
            return Ok(None);
        };
        let record: CounterRecord = self
            .counter_migrator
            .load_flat_from("counter", value)
            .map_err(|e| DreamclerkError::migration(format!("Failed to load counter: {}", e)))?;
        Ok(Some(record))
    }

    async fn save_stats(&self, record: &CounterRecord) -> Result<()> {
        let serialized = self
            .counter_migrator
            .save_domain_flat("counter", record.clone())
            .map_err(|e| DreamclerkError::data_access(format!("Failed to serialize counter: {}", e)))?;
        self.stats.write(&record.name, &serialized).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_registration_count() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileCounterRepository::new(temp_dir.path());
        assert_eq!(repo.count_registrations().await.unwrap(), 0);

        repo.record_registration(&RegistrationEntry::new("u1", "a@example.com"))
            .await
            .unwrap();
        repo.record_registration(&RegistrationEntry::new("u2", "b@example.com"))
            .await
            .unwrap();
        // Same user id replaces its row.
        repo.record_registration(&RegistrationEntry::new("u2", "b@example.com"))
            .await
            .unwrap();

        assert_eq!(repo.count_registrations().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_stats_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileCounterRepository::new(temp_dir.path());
        assert!(repo.load_stats("active_users").await.unwrap().is_none());

        let record = CounterRecord::new("active_users", 42);
        repo.save_stats(&record).await.unwrap();

        let loaded = repo.load_stats("active_users").await.unwrap().unwrap();
        assert_eq!(loaded, record);
    }
}
