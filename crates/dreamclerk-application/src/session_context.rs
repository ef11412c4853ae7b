//! Session context: the one place that owns the services and the signed-in
//! user for a running client.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::RwLock;

use dreamclerk_core::config::AppConfig;
use dreamclerk_core::counter::CounterRepository;
use dreamclerk_core::error::{DreamclerkError, Result};
use dreamclerk_core::notification::NotificationRepository;
use dreamclerk_core::registration::RegistrationWizard;
use dreamclerk_core::user::{UserRecord, UserRepository};
use dreamclerk_infrastructure::{
    DreamclerkPaths, FileCounterRepository, FileNotificationRepository, FileUserRepository,
};

use crate::counter_service::CounterService;
use crate::notification_center::NotificationCenter;
use crate::profile_service::ProfileService;
use crate::registration_service::RegistrationService;

/// Services plus signed-in state, created once per client and dropped on
/// shutdown. `logout` clears the signed-in user.
pub struct SessionContext {
    config: AppConfig,
    users: Arc<dyn UserRepository>,
    counter: Arc<CounterService>,
    notifications: Arc<NotificationCenter>,
    profiles: Arc<ProfileService>,
    registration: Arc<RegistrationService>,
    current_user: RwLock<Option<String>>,
}

impl SessionContext {
    /// Opens the file-backed store at the configured data directory.
    pub fn open(config: AppConfig) -> Result<Self> {
        let data_dir: PathBuf = DreamclerkPaths::resolve_data_dir(&config)
            .map_err(|e| DreamclerkError::config(e.to_string()))?;
        tracing::debug!(data_dir = %data_dir.display(), "opening document store");

        Ok(Self::from_repositories(
            config,
            Arc::new(FileUserRepository::new(&data_dir)),
            Arc::new(FileCounterRepository::new(&data_dir)),
            Arc::new(FileNotificationRepository::new(&data_dir)),
        ))
    }

    /// Wires the services over arbitrary repositories.
    pub fn from_repositories(
        config: AppConfig,
        users: Arc<dyn UserRepository>,
        counters: Arc<dyn CounterRepository>,
        notifications: Arc<dyn NotificationRepository>,
    ) -> Self {
        let counter = Arc::new(CounterService::new(
            counters.clone(),
            config.active_users_counter.clone(),
        ));
        let notifications = Arc::new(NotificationCenter::new(
            notifications,
            config.notification_channel_capacity,
        ));
        let profiles = Arc::new(ProfileService::new(users.clone()));
        let registration = Arc::new(RegistrationService::new(
            users.clone(),
            counters,
            counter.clone(),
            notifications.clone(),
        ));

        Self {
            config,
            users,
            counter,
            notifications,
            profiles,
            registration,
            current_user: RwLock::new(None),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn counter(&self) -> &Arc<CounterService> {
        &self.counter
    }

    pub fn notifications(&self) -> &Arc<NotificationCenter> {
        &self.notifications
    }

    pub fn profiles(&self) -> &Arc<ProfileService> {
        &self.profiles
    }

    pub fn registration(&self) -> &Arc<RegistrationService> {
        &self.registration
    }

    /// Submits the wizard and signs the new user in.
    pub async fn register(&self, wizard: &mut RegistrationWizard) -> Result<UserRecord> {
        let user = self.registration.submit(wizard).await?;
        *self.current_user.write().await = Some(user.id.clone());
        wizard.reset();
        Ok(user)
    }

    /// Signs in an existing user by email. Credentials are checked by the
    /// hosted auth service before this is called.
    pub async fn sign_in(&self, email: &str) -> Result<UserRecord> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| DreamclerkError::not_found("user", email))?;
        *self.current_user.write().await = Some(user.id.clone());
        tracing::info!(user_id = %user.id, "signed in");
        Ok(user)
    }

    pub async fn current_user_id(&self) -> Option<String> {
        self.current_user.read().await.clone()
    }

    /// The signed-in user's record, or `None` when signed out.
    pub async fn current_user(&self) -> Result<Option<UserRecord>> {
        match self.current_user_id().await {
            Some(id) => self.users.find_by_id(&id).await,
            None => Ok(None),
        }
    }

    /// Clears the signed-in user.
    pub async fn logout(&self) {
        if let Some(id) = self.current_user.write().await.take() {
            tracing::info!(user_id = %id, "signed out");
        }
    }
}
