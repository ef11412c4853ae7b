//! Counter service behind the "active users" display.
//!
//! Reads never fail from the caller's point of view: a store error is logged
//! and the last value this service saw is returned instead (0 before the
//! first successful read).

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::Mutex;

use dreamclerk_core::counter::{CounterRecord, CounterRepository};
use dreamclerk_core::error::Result;

pub struct CounterService {
    repository: Arc<dyn CounterRepository>,
    /// Name of the stats record `increment` writes.
    counter_name: String,
    last_known: AtomicU64,
    /// Serializes read-then-write increments issued through this service.
    increment_lock: Mutex<()>,
}

impl CounterService {
    pub fn new(repository: Arc<dyn CounterRepository>, counter_name: impl Into<String>) -> Self {
        Self {
            repository,
            counter_name: counter_name.into(),
            last_known: AtomicU64::new(0),
            increment_lock: Mutex::new(()),
        }
    }

    pub fn counter_name(&self) -> &str {
        &self.counter_name
    }

    /// The last value successfully read or written.
    pub fn last_known(&self) -> u64 {
        self.last_known.load(Ordering::SeqCst)
    }

    /// Current number of registrations.
    pub async fn get_count(&self) -> u64 {
        match self.repository.count_registrations().await {
            Ok(count) => {
                self.last_known.store(count, Ordering::SeqCst);
                count
            }
            Err(e) => {
                let fallback = self.last_known();
                tracing::warn!(error = %e, fallback, "failed to read registration count");
                fallback
            }
        }
    }

    /// Re-reads the registration count, writes count + 1 to the stats
    /// record and returns it.
    ///
    /// Another process writing the same stats record can still interleave
    /// between the read and the write.
    pub async fn increment(&self) -> u64 {
        let _guard = self.increment_lock.lock().await;

        match self.try_increment().await {
            Ok(value) => {
                self.last_known.store(value, Ordering::SeqCst);
                tracing::debug!(counter = %self.counter_name, value, "counter incremented");
                value
            }
            Err(e) => {
                let fallback = self.last_known();
                tracing::warn!(error = %e, counter = %self.counter_name, fallback, "failed to increment counter");
                fallback
            }
        }
    }

    async fn try_increment(&self) -> Result<u64> {
        let count = self.repository.count_registrations().await?;
        let next = count + 1;
        self.repository
            .save_stats(&CounterRecord::new(&self.counter_name, next))
            .await?;
        Ok(next)
    }

    /// Rewrites the stats record to the current registration count and
    /// returns it. Undoes an increment whose registration never landed.
    pub async fn resync(&self) -> u64 {
        let _guard = self.increment_lock.lock().await;

        match self.try_resync().await {
            Ok(value) => {
                self.last_known.store(value, Ordering::SeqCst);
                tracing::debug!(counter = %self.counter_name, value, "counter resynced");
                value
            }
            Err(e) => {
                let fallback = self.last_known();
                tracing::warn!(error = %e, counter = %self.counter_name, fallback, "failed to resync counter");
                fallback
            }
        }
    }

    async fn try_resync(&self) -> Result<u64> {
        let count = self.repository.count_registrations().await?;
        self.repository
            .save_stats(&CounterRecord::new(&self.counter_name, count))
            .await?;
        Ok(count)
    }

    /// The stored stats record, if one was ever written.
    pub async fn stats(&self) -> Result<Option<CounterRecord>> {
        self.repository.load_stats(&self.counter_name).await
    }
}
