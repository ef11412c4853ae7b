//! Domain layer of Dreamclerk: models, validation rules and repository
//! traits. Nothing in this crate touches the file system or network.

pub mod config;
pub mod counter;
pub mod error;
pub mod notification;
pub mod registration;
pub mod user;

// Re-export common error type
pub use error::{DreamclerkError, Result};
