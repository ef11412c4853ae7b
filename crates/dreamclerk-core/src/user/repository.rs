//! User repository trait.

use async_trait::async_trait;

use super::model::UserRecord;
use crate::error::Result;

/// An abstract repository for user records.
///
/// Decouples the services from the document store backing them (local JSON
/// files, a hosted document service, an in-memory map in tests).
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UserRecord))`: User found
    /// - `Ok(None)`: User not found
    /// - `Err(_)`: Error occurred during retrieval
    async fn find_by_id(&self, user_id: &str) -> Result<Option<UserRecord>>;

    /// Finds a user by email address (case-insensitive).
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>>;

    /// Inserts or replaces a user record.
    async fn save(&self, user: &UserRecord) -> Result<()>;

    /// Deletes a user record. Deleting an absent user is not an error.
    async fn delete(&self, user_id: &str) -> Result<()>;

    /// Lists every stored user.
    async fn list_all(&self) -> Result<Vec<UserRecord>>;
}
