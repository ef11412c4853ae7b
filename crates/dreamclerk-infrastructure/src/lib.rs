//! Local document store backing the Dreamclerk repositories.

pub mod config_service;
pub mod dto;
pub mod file_counter_repository;
pub mod file_notification_repository;
pub mod file_user_repository;
pub mod json_store;
pub mod paths;

pub use crate::config_service::ConfigService;
pub use crate::file_counter_repository::FileCounterRepository;
pub use crate::file_notification_repository::FileNotificationRepository;
pub use crate::file_user_repository::FileUserRepository;
pub use crate::paths::DreamclerkPaths;
