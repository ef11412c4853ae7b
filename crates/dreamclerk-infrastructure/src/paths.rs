//! Unified path management for Dreamclerk files.
//!
//! Platform directories are resolved through `AppPaths` from the
//! version-migrate crate (XDG on Linux/macOS, the usual locations on Windows).

use std::path::{Path, PathBuf};
use version_migrate::AppPaths;

use dreamclerk_core::config::AppConfig;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Collections of the document store, one directory each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Users,
    Registrations,
    Stats,
    Notifications,
}

impl Collection {
    pub fn dir_name(self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Registrations => "registrations",
            Collection::Stats => "stats",
            Collection::Notifications => "notifications",
        }
    }
}

/// Path management for Dreamclerk.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/dreamclerk/          # Config directory
/// └── config.toml                # Application configuration
///
/// ~/.local/share/dreamclerk/     # Data directory (document store)
/// ├── users/<id>.json
/// ├── registrations/<user_id>.json
/// ├── stats/<name>.json
/// └── notifications/<id>.json
/// ```
pub struct DreamclerkPaths;

impl DreamclerkPaths {
    fn app_paths() -> AppPaths {
        AppPaths::new("dreamclerk")
    }

    /// Returns the Dreamclerk configuration directory.
    pub fn config_dir() -> Result<PathBuf, PathError> {
        Self::app_paths()
            .config_dir()
            .map_err(|_| PathError::HomeDirNotFound)
    }

    /// Returns the platform data directory.
    pub fn data_dir() -> Result<PathBuf, PathError> {
        Self::app_paths()
            .data_dir()
            .map_err(|_| PathError::HomeDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Data directory for a loaded config: the configured one if set,
    /// otherwise the platform default.
    pub fn resolve_data_dir(config: &AppConfig) -> Result<PathBuf, PathError> {
        match &config.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => Self::data_dir(),
        }
    }

    /// Directory of a collection below `data_dir`.
    pub fn collection_dir(data_dir: &Path, collection: Collection) -> PathBuf {
        data_dir.join(collection.dir_name())
    }
}
