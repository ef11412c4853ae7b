//! Submission side of the sign-up wizard.

use std::sync::Arc;

use tokio::sync::Mutex;

use dreamclerk_core::counter::{CounterRepository, RegistrationEntry};
use dreamclerk_core::error::{DreamclerkError, Result};
use dreamclerk_core::notification::NotificationKind;
use dreamclerk_core::registration::{RegistrationForm, RegistrationRequest, RegistrationWizard, validate_all};
use dreamclerk_core::user::{UserRecord, UserRepository};

use crate::counter_service::CounterService;
use crate::notification_center::NotificationCenter;

pub const WELCOME_MESSAGE: &str = "Welcome to Dreamclerk! Complete your profile to get started.";
pub const WELCOME_LINK: &str = "/dashboard/profile";

pub struct RegistrationService {
    users: Arc<dyn UserRepository>,
    registrations: Arc<dyn CounterRepository>,
    counter: Arc<CounterService>,
    notifications: Arc<NotificationCenter>,
    /// Held from the duplicate check until the registration row is written.
    register_lock: Mutex<()>,
}

impl RegistrationService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        registrations: Arc<dyn CounterRepository>,
        counter: Arc<CounterService>,
        notifications: Arc<NotificationCenter>,
    ) -> Self {
        Self {
            users,
            registrations,
            counter,
            notifications,
            register_lock: Mutex::new(()),
        }
    }

    /// Submits a wizard sitting on its final step.
    ///
    /// Validation failures leave the wizard on the failing step with its
    /// error message set.
    pub async fn submit(&self, wizard: &mut RegistrationWizard) -> Result<UserRecord> {
        let request = wizard.submit()?;
        self.register(request).await
    }

    /// Validates a complete form and registers it.
    pub async fn register_form(&self, form: &RegistrationForm) -> Result<UserRecord> {
        validate_all(form)?;
        self.register(RegistrationRequest::from(form)).await
    }

    /// Creates the user, bumps the counter, records the registration and
    /// sends the welcome notification.
    ///
    /// Registrations through one service run one at a time. A failure to
    /// create the user or record the registration fails the call and leaves
    /// nothing behind; the counter degrades on its own and a failed welcome
    /// notification is logged.
    pub async fn register(&self, request: RegistrationRequest) -> Result<UserRecord> {
        let _guard = self.register_lock.lock().await;

        if self.users.find_by_email(&request.email).await?.is_some() {
            return Err(DreamclerkError::conflict(
                "An account with this email already exists.",
            ));
        }

        let mut user = UserRecord::new(request.name, request.email);
        user.bio = request.bio;
        self.users.save(&user).await?;

        // Counter reads the registrations before this one is recorded, so
        // count + 1 equals the new total.
        let active_users = self.counter.increment().await;

        let email = user.email.clone().unwrap_or_default();
        if let Err(e) = self
            .registrations
            .record_registration(&RegistrationEntry::new(&user.id, email))
            .await
        {
            self.roll_back(&user).await;
            return Err(e);
        }

        if let Err(e) = self
            .notifications
            .notify(
                &user.id,
                WELCOME_MESSAGE,
                NotificationKind::Success,
                Some(WELCOME_LINK.to_string()),
            )
            .await
        {
            tracing::warn!(error = %e, user_id = %user.id, "failed to send welcome notification");
        }

        tracing::info!(user_id = %user.id, active_users, "user registered");
        Ok(user)
    }

    /// Removes a user whose registration row could not be written and puts
    /// the counter back.
    async fn roll_back(&self, user: &UserRecord) {
        tracing::warn!(user_id = %user.id, "registration not recorded, rolling back");
        if let Err(e) = self.users.delete(&user.id).await {
            tracing::error!(error = %e, user_id = %user.id, "failed to remove unregistered user");
        }
        self.counter.resync().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use dreamclerk_core::counter::CounterRecord;
    use dreamclerk_infrastructure::{FileCounterRepository, FileNotificationRepository, FileUserRepository};
    use std::path::Path;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tempfile::TempDir;

    /// File-backed counter repository whose registration writes can be
    /// switched to fail.
    struct UnrecordableRepository {
        inner: FileCounterRepository,
        failing: AtomicBool,
    }

    #[async_trait]
    impl CounterRepository for UnrecordableRepository {
        async fn record_registration(&self, entry: &RegistrationEntry) -> Result<()> {
            if self.failing.load(Ordering::SeqCst) {
                return Err(DreamclerkError::data_access("registrations unavailable"));
            }
            self.inner.record_registration(entry).await
        }

        async fn count_registrations(&self) -> Result<u64> {
            self.inner.count_registrations().await
        }

        async fn load_stats(&self, name: &str) -> Result<Option<CounterRecord>> {
            self.inner.load_stats(name).await
        }

        async fn save_stats(&self, record: &CounterRecord) -> Result<()> {
            self.inner.save_stats(record).await
        }
    }

    struct Fixture {
        users: Arc<FileUserRepository>,
        counters: Arc<UnrecordableRepository>,
        counter: Arc<CounterService>,
        service: Arc<RegistrationService>,
    }

    fn fixture(data_dir: &Path) -> Fixture {
        let users = Arc::new(FileUserRepository::new(data_dir));
        let counters = Arc::new(UnrecordableRepository {
            inner: FileCounterRepository::new(data_dir),
            failing: AtomicBool::new(false),
        });
        let counter = Arc::new(CounterService::new(counters.clone(), "active_users"));
        let notifications = Arc::new(NotificationCenter::new(
            Arc::new(FileNotificationRepository::new(data_dir)),
            16,
        ));
        let service = Arc::new(RegistrationService::new(
            users.clone(),
            counters.clone(),
            counter.clone(),
            notifications,
        ));
        Fixture {
            users,
            counters,
            counter,
            service,
        }
    }

    fn request(email: &str) -> RegistrationRequest {
        RegistrationRequest {
            name: "Student".to_string(),
            email: email.to_string(),
            bio: None,
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_registrations_keep_counter_in_step() {
        let temp_dir = TempDir::new().unwrap();
        let fx = fixture(temp_dir.path());

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let service = fx.service.clone();
                tokio::spawn(async move { service.register(request(&format!("s{}@example.com", i))).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(fx.counter.get_count().await, 4);
        assert_eq!(fx.counter.stats().await.unwrap().unwrap().value, 4);
        assert_eq!(fx.users.list_all().await.unwrap().len(), 4);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_concurrent_duplicate_email_registers_once() {
        let temp_dir = TempDir::new().unwrap();
        let fx = fixture(temp_dir.path());

        let (a, b) = tokio::join!(
            fx.service.register(request("ada@example.com")),
            fx.service.register(request("ada@example.com")),
        );

        assert_eq!(a.is_ok() as u8 + b.is_ok() as u8, 1);
        let err = a.err().or(b.err()).unwrap();
        assert!(err.is_conflict());
        assert_eq!(fx.users.list_all().await.unwrap().len(), 1);
        assert_eq!(fx.counter.get_count().await, 1);
    }

    #[tokio::test]
    async fn test_failed_registration_row_leaves_nothing_behind() {
        let temp_dir = TempDir::new().unwrap();
        let fx = fixture(temp_dir.path());
        fx.service.register(request("first@example.com")).await.unwrap();

        fx.counters.failing.store(true, Ordering::SeqCst);
        let err = fx.service.register(request("ada@example.com")).await.unwrap_err();
        assert!(matches!(err, DreamclerkError::DataAccess(_)));
        assert!(fx.users.find_by_email("ada@example.com").await.unwrap().is_none());
        assert_eq!(fx.counter.stats().await.unwrap().unwrap().value, 1);

        // A retry is not blocked by a half-created account.
        fx.counters.failing.store(false, Ordering::SeqCst);
        fx.service.register(request("ada@example.com")).await.unwrap();
        assert_eq!(fx.counter.get_count().await, 2);
        assert_eq!(fx.counter.stats().await.unwrap().unwrap().value, 2);
    }
}
