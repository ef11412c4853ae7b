//! Notification domain module.

mod model;
pub mod repository;

pub use model::{NotificationEvent, NotificationKind, NotificationRecord};
pub use repository::NotificationRepository;
