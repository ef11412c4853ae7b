//! Directory-per-collection JSON document store.
//!
//! Each document lives in `{collection_dir}/{id}.json`. Writes go to a
//! temporary sibling file first and are renamed into place, so a reader
//! never sees a half-written document.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tokio::fs;

use dreamclerk_core::error::{DreamclerkError, Result};

const EXTENSION: &str = "json";
const TMP_SUFFIX: &str = ".tmp";

/// Raw JSON documents of one collection.
///
/// Versioning and conversion to domain types are left to the repositories.
#[derive(Debug, Clone)]
pub struct JsonDocumentStore {
    dir: PathBuf,
}

impl JsonDocumentStore {
    /// Opens a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn document_path(&self, id: &str) -> Result<PathBuf> {
        if id.is_empty()
            || id.contains(['/', '\\'])
            || id.starts_with('.')
            || id.contains("..")
        {
            return Err(DreamclerkError::validation(format!(
                "Invalid document id: '{}'",
                id
            )));
        }
        Ok(self.dir.join(format!("{}.{}", id, EXTENSION)))
    }

    /// Reads a document.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Value))`: Document found
    /// - `Ok(None)`: No document with this id
    pub async fn read(&self, id: &str) -> Result<Option<Value>> {
        let path = self.document_path(id)?;
        if !fs::try_exists(&path).await? {
            return Ok(None);
        }

        let content = fs::read_to_string(&path).await.map_err(|e| {
            DreamclerkError::io(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let value: Value = serde_json::from_str(&content)?;
        Ok(Some(value))
    }

    /// Writes a serialized document, replacing any existing one.
    pub async fn write(&self, id: &str, content: &str) -> Result<()> {
        let path = self.document_path(id)?;
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| DreamclerkError::io(format!("Failed to create directory: {}", e)))?;

        let tmp_path = self.dir.join(format!("{}.{}{}", id, EXTENSION, TMP_SUFFIX));
        fs::write(&tmp_path, content)
            .await
            .map_err(|e| DreamclerkError::io(format!("Failed to write document: {}", e)))?;
        fs::rename(&tmp_path, &path)
            .await
            .map_err(|e| DreamclerkError::io(format!("Failed to replace document: {}", e)))?;

        tracing::debug!(path = %path.display(), "document written");
        Ok(())
    }

    /// Removes a document. Removing an absent document is not an error.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let path = self.document_path(id)?;
        if !fs::try_exists(&path).await? {
            return Ok(());
        }
        fs::remove_file(&path)
            .await
            .map_err(|e| DreamclerkError::io(format!("Failed to delete {}: {}", path.display(), e)))?;

        tracing::debug!(path = %path.display(), "document deleted");
        Ok(())
    }

    /// Ids of every document in the collection. An absent directory is an
    /// empty collection.
    pub async fn ids(&self) -> Result<Vec<String>> {
        if !fs::try_exists(&self.dir).await? {
            return Ok(Vec::new());
        }

        let mut ids = Vec::new();
        let mut entries = fs::read_dir(&self.dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                ids.push(stem.to_string());
            }
        }
        ids.sort();
        Ok(ids)
    }

    /// Number of documents in the collection.
    pub async fn count(&self) -> Result<u64> {
        Ok(self.ids().await?.len() as u64)
    }

    /// Reads every document in the collection, as `(id, value)` pairs.
    pub async fn read_all(&self) -> Result<Vec<(String, Value)>> {
        let mut documents = Vec::new();
        for id in self.ids().await? {
            if let Some(value) = self.read(&id).await? {
                documents.push((id, value));
            }
        }
        Ok(documents)
    }
}
