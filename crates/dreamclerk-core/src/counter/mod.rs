//! Counter domain module.
//!
//! Backs the decorative "active users" figure: the registrations row count
//! is the source, a named stats record holds the last published value.

mod model;
pub mod repository;

pub use model::{ACTIVE_USERS_COUNTER, CounterRecord, RegistrationEntry};
pub use repository::CounterRepository;
