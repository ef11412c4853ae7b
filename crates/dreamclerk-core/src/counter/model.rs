//! Counter domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default name of the "active users" counter shown on the landing pages.
pub const ACTIVE_USERS_COUNTER: &str = "active_users";

/// A single named integer kept in the "stats" collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterRecord {
    pub name: String,
    pub value: u64,
    pub updated_at: DateTime<Utc>,
}

impl CounterRecord {
    pub fn new(name: impl Into<String>, value: u64) -> Self {
        Self {
            name: name.into(),
            value,
            updated_at: Utc::now(),
        }
    }
}

/// One row of the "registrations" collection. Its row count is the
/// authoritative number of sign-ups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationEntry {
    pub user_id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl RegistrationEntry {
    pub fn new(user_id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            email: email.into(),
            created_at: Utc::now(),
        }
    }
}
