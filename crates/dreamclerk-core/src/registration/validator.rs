//! Per-step validation rules for the sign-up wizard.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::form::RegistrationForm;

/// First step of the wizard.
pub const FIRST_STEP: u8 = 1;
/// Confirmation step; validating it triggers submission.
pub const FINAL_STEP: u8 = 5;
/// Minimum accepted password length.
pub const MIN_PASSWORD_LENGTH: usize = 6;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// A rule failure. The `Display` text is the message shown under the form.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("Please enter your name.")]
    NameRequired,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Password must be at least 6 characters.")]
    PasswordTooShort,
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("Please accept the terms and conditions.")]
    TermsNotAccepted,
    #[error("Invalid registration step.")]
    InvalidStep(u8),
}

impl From<ValidationError> for crate::error::DreamclerkError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// What the wizard should do after a step validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepOutcome {
    /// Move on to the given step.
    Advance(u8),
    /// The confirmation step passed; submit the registration.
    Submit,
}

/// Returns true for addresses of the form `localpart@domain.tld`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email.trim())
}

/// Validates a single step of the form.
pub fn validate_step(step: u8, form: &RegistrationForm) -> Result<StepOutcome, ValidationError> {
    match step {
        1 => {
            if form.name.trim().is_empty() {
                return Err(ValidationError::NameRequired);
            }
        }
        2 => {
            if !is_valid_email(&form.email) {
                return Err(ValidationError::InvalidEmail);
            }
        }
        3 => {
            if form.password.chars().count() < MIN_PASSWORD_LENGTH {
                return Err(ValidationError::PasswordTooShort);
            }
            if form.password != form.confirm_password {
                return Err(ValidationError::PasswordMismatch);
            }
        }
        4 => {
            if !form.accept_terms {
                return Err(ValidationError::TermsNotAccepted);
            }
        }
        FINAL_STEP => return Ok(StepOutcome::Submit),
        other => return Err(ValidationError::InvalidStep(other)),
    }

    Ok(StepOutcome::Advance(step + 1))
}

/// Runs every input step (1 through 4) in order, stopping at the first
/// failure.
pub fn validate_all(form: &RegistrationForm) -> Result<(), ValidationError> {
    for step in FIRST_STEP..FINAL_STEP {
        validate_step(step, form)?;
    }
    Ok(())
}
