//! UserRecord DTOs and migrations
//!
//! ## Version History
//! - **1.0.0**: Initial schema; carried a stored `profileCompleted` flag
//! - **1.1.0**: Dropped `profileCompleted`; completion is derived on read

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use version_migrate::{FromDomain, IntoDomain, MigratesTo, Versioned};

use dreamclerk_core::user::UserRecord;

/// User record V1.0.0 (stored completion flag).
#[derive(Debug, Clone, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.0.0")]
#[serde(rename_all = "camelCase")]
pub struct UserRecordV1_0_0 {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub university: Option<String>,
    #[serde(default)]
    pub major: Option<String>,
    #[serde(default)]
    pub graduation_year: Option<u16>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Stored flag that drifted from the record; ignored from 1.1.0 on.
    #[serde(default)]
    pub profile_completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User record V1.1.0 (latest).
#[derive(Debug, Clone, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.1.0")]
#[serde(rename_all = "camelCase")]
pub struct UserRecordV1_1_0 {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub university: Option<String>,
    #[serde(default)]
    pub major: Option<String>,
    #[serde(default)]
    pub graduation_year: Option<u16>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Migration implementations
// ============================================================================

/// Migration from V1.0.0 to V1.1.0: the stored completion flag is dropped.
impl MigratesTo<UserRecordV1_1_0> for UserRecordV1_0_0 {
    fn migrate(self) -> UserRecordV1_1_0 {
        UserRecordV1_1_0 {
            id: self.id,
            name: self.name,
            email: self.email,
            bio: self.bio,
            location: self.location,
            university: self.university,
            major: self.major,
            graduation_year: self.graduation_year,
            website: self.website,
            avatar_url: self.avatar_url,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

// ============================================================================
// Domain model conversions
// ============================================================================

impl IntoDomain<UserRecord> for UserRecordV1_1_0 {
    fn into_domain(self) -> UserRecord {
        UserRecord {
            id: self.id,
            name: self.name,
            email: self.email,
            bio: self.bio,
            location: self.location,
            university: self.university,
            major: self.major,
            graduation_year: self.graduation_year,
            website: self.website,
            avatar_url: self.avatar_url,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl FromDomain<UserRecord> for UserRecordV1_1_0 {
    fn from_domain(user: UserRecord) -> Self {
        UserRecordV1_1_0 {
            id: user.id,
            name: user.name,
            email: user.email,
            bio: user.bio,
            location: user.location,
            university: user.university,
            major: user.major,
            graduation_year: user.graduation_year,
            website: user.website,
            avatar_url: user.avatar_url,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

// ============================================================================
// Migrator factory
// ============================================================================

/// Creates a Migrator for UserRecord entities.
///
/// # Migration Path
///
/// - V1.0.0 → V1.1.0: drops `profileCompleted`
/// - V1.1.0 → UserRecord
pub fn create_user_record_migrator() -> version_migrate::Migrator {
    version_migrate::migrator!("user_record" => [
        UserRecordV1_0_0,
        UserRecordV1_1_0,
        UserRecord
    ], save = true)
    .expect("Failed to create user_record migrator")
}
