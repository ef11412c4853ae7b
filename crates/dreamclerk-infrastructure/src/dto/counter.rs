//! Counter and registration DTOs
//!
//! ## Version History
//! - **1.0.0**: Initial schema for both entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use version_migrate::{FromDomain, IntoDomain, Versioned};

use dreamclerk_core::counter::{CounterRecord, RegistrationEntry};

/// Stats record DTO V1.0.0
#[derive(Debug, Clone, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.0.0")]
#[serde(rename_all = "camelCase")]
pub struct CounterRecordV1_0_0 {
    pub name: String,
    pub value: u64,
    pub updated_at: DateTime<Utc>,
}

impl IntoDomain<CounterRecord> for CounterRecordV1_0_0 {
    fn into_domain(self) -> CounterRecord {
        CounterRecord {
            name: self.name,
            value: self.value,
            updated_at: self.updated_at,
        }
    }
}

impl FromDomain<CounterRecord> for CounterRecordV1_0_0 {
    fn from_domain(record: CounterRecord) -> Self {
        CounterRecordV1_0_0 {
            name: record.name,
            value: record.value,
            updated_at: record.updated_at,
        }
    }
}

/// Registration row DTO V1.0.0
#[derive(Debug, Clone, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.0.0")]
#[serde(rename_all = "camelCase")]
pub struct RegistrationEntryV1_0_0 {
    pub user_id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl IntoDomain<RegistrationEntry> for RegistrationEntryV1_0_0 {
    fn into_domain(self) -> RegistrationEntry {
        RegistrationEntry {
            user_id: self.user_id,
            email: self.email,
            created_at: self.created_at,
        }
    }
}

impl FromDomain<RegistrationEntry> for RegistrationEntryV1_0_0 {
    fn from_domain(entry: RegistrationEntry) -> Self {
        RegistrationEntryV1_0_0 {
            user_id: entry.user_id,
            email: entry.email,
            created_at: entry.created_at,
        }
    }
}

// ============================================================================
// Migrator factories
// ============================================================================

/// Creates a Migrator for CounterRecord entities.
pub fn create_counter_migrator() -> version_migrate::Migrator {
    version_migrate::migrator!("counter" => [CounterRecordV1_0_0, CounterRecord], save = true)
        .expect("Failed to create counter migrator")
}

/// Creates a Migrator for RegistrationEntry entities.
pub fn create_registration_migrator() -> version_migrate::Migrator {
    version_migrate::migrator!("registration" => [
        RegistrationEntryV1_0_0,
        RegistrationEntry
    ], save = true)
    .expect("Failed to create registration migrator")
}
