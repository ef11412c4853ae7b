//! Configuration service implementation.
//!
//! Loads [`AppConfig`] from `config.toml` (by default
//! `~/.config/dreamclerk/config.toml`). A missing file yields the defaults.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::fs;
use tokio::sync::RwLock;

use dreamclerk_core::config::AppConfig;
use dreamclerk_core::error::{DreamclerkError, Result};

use crate::paths::DreamclerkPaths;

/// Configuration service that loads and caches the application config.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<AppConfig>>>,
}

impl ConfigService {
    /// Creates a service reading the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates a service reading the platform default config file.
    pub fn with_default_path() -> Result<Self> {
        let path = DreamclerkPaths::config_file()
            .map_err(|e| DreamclerkError::config(e.to_string()))?;
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the configuration, loading it from disk on first access.
    pub async fn get_config(&self) -> Result<AppConfig> {
        if let Some(cached) = self.config.read().await.as_ref() {
            return Ok(cached.clone());
        }

        let loaded = self.load().await?;
        *self.config.write().await = Some(loaded.clone());
        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub async fn invalidate_cache(&self) {
        *self.config.write().await = None;
    }

    async fn load(&self) -> Result<AppConfig> {
        if !fs::try_exists(&self.path).await? {
            tracing::debug!(path = %self.path.display(), "config file missing, using defaults");
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| DreamclerkError::io(format!("Failed to read config: {}", e)))?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Writes the configuration and refreshes the cache.
    pub async fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| DreamclerkError::io(format!("Failed to create directory: {}", e)))?;
        }

        let content = toml::to_string_pretty(config)
            .map_err(|e| DreamclerkError::config(format!("Failed to serialize config: {}", e)))?;
        fs::write(&self.path, content)
            .await
            .map_err(|e| DreamclerkError::io(format!("Failed to write config: {}", e)))?;

        *self.config.write().await = Some(config.clone());
        Ok(())
    }
}
