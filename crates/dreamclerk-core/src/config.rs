//! Application configuration model.
//!
//! Loaded from `config.toml` by the infrastructure layer; every field has a
//! default so a missing or partial file is valid.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::counter::ACTIVE_USERS_COUNTER;

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding the document store. `None` uses the platform data
    /// directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    /// Default `tracing` filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// Buffer size of the notifications change stream.
    pub notification_channel_capacity: usize,
    /// Name of the stats record behind the "active users" display.
    pub active_users_counter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            log_level: "info".to_string(),
            notification_channel_capacity: 64,
            active_users_counter: ACTIVE_USERS_COUNTER.to_string(),
        }
    }
}
