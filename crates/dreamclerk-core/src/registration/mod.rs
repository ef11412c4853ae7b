//! Registration domain module.
//!
//! Client-side rules for the five-step sign-up wizard: name, email,
//! password, terms, confirmation.
//!
//! # Module Structure
//!
//! - `form`: form state and the validated request
//! - `validator`: per-step rules and their user-facing messages
//! - `password`: informational password strength score
//! - `wizard`: step state machine

mod form;
mod password;
mod validator;
mod wizard;

// Re-export public API
pub use form::{RegistrationForm, RegistrationRequest};
pub use password::{PasswordScore, PasswordStrength, score_password};
pub use validator::{
    FINAL_STEP, FIRST_STEP, MIN_PASSWORD_LENGTH, StepOutcome, ValidationError, is_valid_email,
    validate_all, validate_step,
};
pub use wizard::RegistrationWizard;
