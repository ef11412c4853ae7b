//! Application layer for Dreamclerk.
//!
//! Services coordinating the domain rules in `dreamclerk-core` with the
//! repositories in `dreamclerk-infrastructure`.

pub mod counter_service;
pub mod notification_center;
pub mod profile_service;
pub mod registration_service;
pub mod session_context;

pub use counter_service::CounterService;
pub use notification_center::NotificationCenter;
pub use profile_service::ProfileService;
pub use registration_service::RegistrationService;
pub use session_context::SessionContext;
