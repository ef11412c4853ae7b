//! Data Transfer Objects (DTOs) for persistence.
//!
//! These DTOs represent the versioned schema of the JSON documents. They are
//! private to the infrastructure layer and absorb storage format changes.
//!
//! ## Schema Versioning (Semantic Versioning)
//!
//! - **MAJOR (X.0.0)**: Breaking changes (field removal, type changes)
//! - **MINOR (1.X.0)**: Backward-compatible changes (new optional fields,
//!   dropping derived fields)
//!
//! ### UserRecord Version History
//! - **1.0.0**: Stored `profileCompleted` flag
//! - **1.1.0**: Flag removed, completion derived on read

mod counter;
mod notification;
mod user_record;

pub use counter::{
    CounterRecordV1_0_0, RegistrationEntryV1_0_0, create_counter_migrator,
    create_registration_migrator,
};
pub use notification::{NotificationKindDTO, NotificationV1_0_0, create_notification_migrator};
pub use user_record::{UserRecordV1_0_0, UserRecordV1_1_0, create_user_record_migrator};
