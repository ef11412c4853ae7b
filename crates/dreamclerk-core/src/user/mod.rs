//! User domain module.
//!
//! # Module Structure
//!
//! - `model`: `UserRecord`, `ProfileField` and the required field list
//! - `completion`: derived profile completion check
//! - `repository`: persistence trait
//!
//! # Usage
//!
//! ```ignore
//! use dreamclerk_core::user::{UserRecord, check_profile};
//! ```

mod completion;
mod model;
pub mod repository;

// Re-export public API
pub use completion::{ProfileCompletion, check_fields, check_profile};
pub use model::{ProfileField, ProfileUpdate, REQUIRED_FIELDS, UserRecord};
pub use repository::UserRepository;
