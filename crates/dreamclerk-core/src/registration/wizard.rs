//! Sign-up wizard state machine.

use serde::{Deserialize, Serialize};

use super::form::{RegistrationForm, RegistrationRequest};
use super::password::{PasswordScore, score_password};
use super::validator::{FINAL_STEP, FIRST_STEP, StepOutcome, ValidationError, validate_all, validate_step};

/// State of the five-step sign-up modal.
///
/// The step counter only moves forward through [`RegistrationWizard::next`],
/// which refuses to advance past a step whose rule fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationWizard {
    step: u8,
    pub form: RegistrationForm,
    error: Option<String>,
}

impl Default for RegistrationWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationWizard {
    pub fn new() -> Self {
        Self {
            step: FIRST_STEP,
            form: RegistrationForm::default(),
            error: None,
        }
    }

    pub fn with_form(form: RegistrationForm) -> Self {
        Self {
            form,
            ..Self::new()
        }
    }

    /// Current step, 1 through 5.
    pub fn step(&self) -> u8 {
        self.step
    }

    /// The message from the last failed validation, cleared on success.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_final_step(&self) -> bool {
        self.step == FINAL_STEP
    }

    /// Informational strength of the current password.
    pub fn password_strength(&self) -> PasswordScore {
        score_password(&self.form.password)
    }

    /// Validates the current step and advances on success.
    ///
    /// On the final step a successful validation returns
    /// [`StepOutcome::Submit`] and the step counter stays put; the caller
    /// then calls [`RegistrationWizard::submit`].
    pub fn next(&mut self) -> Result<StepOutcome, ValidationError> {
        match validate_step(self.step, &self.form) {
            Ok(outcome) => {
                self.error = None;
                if let StepOutcome::Advance(next) = outcome {
                    self.step = next;
                }
                Ok(outcome)
            }
            Err(err) => {
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Goes back one step, never below the first.
    pub fn back(&mut self) {
        self.error = None;
        if self.step > FIRST_STEP {
            self.step -= 1;
        }
    }

    /// Re-validates every step and builds the request to submit.
    ///
    /// Only allowed from the final step. On failure the wizard jumps back to
    /// the first failing step with its error set.
    pub fn submit(&mut self) -> Result<RegistrationRequest, ValidationError> {
        if !self.is_final_step() {
            let err = ValidationError::InvalidStep(self.step);
            self.error = Some(err.to_string());
            return Err(err);
        }

        if let Err(err) = validate_all(&self.form) {
            self.step = failing_step(&err);
            self.error = Some(err.to_string());
            return Err(err);
        }

        self.error = None;
        Ok(RegistrationRequest::from(&self.form))
    }

    /// Resets to an empty form on step 1.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

fn failing_step(err: &ValidationError) -> u8 {
    match err {
        ValidationError::NameRequired => 1,
        ValidationError::InvalidEmail => 2,
        ValidationError::PasswordTooShort | ValidationError::PasswordMismatch => 3,
        ValidationError::TermsNotAccepted => 4,
        ValidationError::InvalidStep(_) => FIRST_STEP,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> RegistrationForm {
        RegistrationForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "Secret123!".to_string(),
            confirm_password: "Secret123!".to_string(),
            bio: "  Maths student ".to_string(),
            accept_terms: true,
        }
    }

    #[test]
    fn test_walks_all_steps_and_submits() {
        let mut wizard = RegistrationWizard::with_form(filled_form());
        for expected in 2..=5 {
            assert_eq!(wizard.next().unwrap(), StepOutcome::Advance(expected));
            assert_eq!(wizard.step(), expected);
        }
        assert_eq!(wizard.next().unwrap(), StepOutcome::Submit);
        assert_eq!(wizard.step(), 5);

        let request = wizard.submit().unwrap();
        assert_eq!(request.name, "Ada");
        assert_eq!(request.email, "ada@example.com");
        assert_eq!(request.bio.as_deref(), Some("Maths student"));
    }

    #[test]
    fn test_failed_step_does_not_advance() {
        let mut wizard = RegistrationWizard::new();
        wizard.form.email = "a@b.com".to_string();

        let err = wizard.next().unwrap_err();
        assert_eq!(err, ValidationError::NameRequired);
        assert_eq!(wizard.step(), 1);
        assert_eq!(wizard.error(), Some("Please enter your name."));

        wizard.form.name = "Ada".to_string();
        wizard.next().unwrap();
        assert_eq!(wizard.step(), 2);
        assert_eq!(wizard.error(), None);
    }

    #[test]
    fn test_back_never_goes_below_first_step() {
        let mut wizard = RegistrationWizard::with_form(filled_form());
        wizard.back();
        assert_eq!(wizard.step(), 1);
        wizard.next().unwrap();
        wizard.back();
        assert_eq!(wizard.step(), 1);
    }

    #[test]
    fn test_submit_requires_final_step() {
        let mut wizard = RegistrationWizard::with_form(filled_form());
        assert_eq!(wizard.submit().unwrap_err(), ValidationError::InvalidStep(1));
    }

    #[test]
    fn test_submit_revalidates_edited_fields() {
        let mut wizard = RegistrationWizard::with_form(filled_form());
        while wizard.step() < 5 {
            wizard.next().unwrap();
        }
        // Edit after the password step already passed.
        wizard.form.confirm_password = "different".to_string();

        assert_eq!(wizard.submit().unwrap_err(), ValidationError::PasswordMismatch);
        assert_eq!(wizard.step(), 3);
        assert_eq!(wizard.error(), Some("Passwords do not match."));
    }

    #[test]
    fn test_password_strength_tracks_form() {
        let mut wizard = RegistrationWizard::new();
        wizard.form.password = "abc12345".to_string();
        assert_eq!(wizard.password_strength().score, 3);
    }

    #[test]
    fn test_reset() {
        let mut wizard = RegistrationWizard::with_form(filled_form());
        wizard.next().unwrap();
        wizard.reset();
        assert_eq!(wizard, RegistrationWizard::new());
    }
}
