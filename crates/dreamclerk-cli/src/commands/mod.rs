pub mod counter;
pub mod notifications;
pub mod profile;
pub mod register;
pub mod utils;
