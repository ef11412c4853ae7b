//! Counter repository trait.

use async_trait::async_trait;

use super::model::{CounterRecord, RegistrationEntry};
use crate::error::Result;

/// Storage for the "registrations" collection and the "stats" records
/// derived from it.
#[async_trait]
pub trait CounterRepository: Send + Sync {
    /// Appends a row to the registrations collection.
    async fn record_registration(&self, entry: &RegistrationEntry) -> Result<()>;

    /// Returns the number of rows in the registrations collection.
    async fn count_registrations(&self) -> Result<u64>;

    /// Loads a stats record by name.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(CounterRecord))`: Record found
    /// - `Ok(None)`: Nothing written under this name yet
    async fn load_stats(&self, name: &str) -> Result<Option<CounterRecord>>;

    /// Writes a stats record, replacing any previous value.
    async fn save_stats(&self, record: &CounterRecord) -> Result<()>;
}
