//! Registration form state.

use serde::{Deserialize, Serialize};

/// Everything the sign-up wizard collects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub accept_terms: bool,
}

/// A fully validated registration, ready to be submitted to the store.
///
/// The password is not carried past validation; credentials belong to the
/// hosted auth service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub name: String,
    pub email: String,
    pub bio: Option<String>,
}

impl From<&RegistrationForm> for RegistrationRequest {
    fn from(form: &RegistrationForm) -> Self {
        let bio = form.bio.trim();
        Self {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            bio: (!bio.is_empty()).then(|| bio.to_string()),
        }
    }
}
