//! Profile reads, edits and the derived completion status.

use std::sync::Arc;

use chrono::Utc;

use dreamclerk_core::error::{DreamclerkError, Result};
use dreamclerk_core::registration::{ValidationError, is_valid_email};
use dreamclerk_core::user::{ProfileCompletion, ProfileUpdate, UserRecord, UserRepository, check_profile};

/// Accepted graduation years.
pub const GRADUATION_YEAR_RANGE: std::ops::RangeInclusive<u16> = 1900..=2100;

pub struct ProfileService {
    users: Arc<dyn UserRepository>,
}

impl ProfileService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Loads a user or fails with `NotFound`.
    pub async fn get(&self, user_id: &str) -> Result<UserRecord> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DreamclerkError::not_found("user", user_id))
    }

    /// Completion status, computed from the current record.
    pub async fn completion(&self, user_id: &str) -> Result<ProfileCompletion> {
        Ok(check_profile(&self.get(user_id).await?))
    }

    /// Applies a partial update and returns the stored record.
    pub async fn update(&self, user_id: &str, update: ProfileUpdate) -> Result<UserRecord> {
        let mut user = self.get(user_id).await?;
        if update.is_empty() {
            return Ok(user);
        }

        validate_update(&update)?;

        if let Some(email) = &update.email {
            if let Some(existing) = self.users.find_by_email(email).await? {
                if existing.id != user.id {
                    return Err(DreamclerkError::conflict(
                        "An account with this email already exists.",
                    ));
                }
            }
        }

        apply_update(&mut user, update);
        user.updated_at = Utc::now();
        self.users.save(&user).await?;

        tracing::info!(user_id, "profile updated");
        Ok(user)
    }
}

fn validate_update(update: &ProfileUpdate) -> Result<()> {
    if let Some(name) = &update.name {
        if name.trim().is_empty() {
            return Err(ValidationError::NameRequired.into());
        }
    }
    if let Some(email) = &update.email {
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail.into());
        }
    }
    if let Some(website) = &update.website {
        let website = website.trim();
        if !website.is_empty() && !(website.starts_with("http://") || website.starts_with("https://")) {
            return Err(DreamclerkError::validation(
                "Website must start with http:// or https://.",
            ));
        }
    }
    if let Some(year) = update.graduation_year {
        if !GRADUATION_YEAR_RANGE.contains(&year) {
            return Err(DreamclerkError::validation(format!(
                "Graduation year must be between {} and {}.",
                GRADUATION_YEAR_RANGE.start(),
                GRADUATION_YEAR_RANGE.end()
            )));
        }
    }
    Ok(())
}

/// `Some("")` clears a text field; `None` keeps it.
fn apply_update(user: &mut UserRecord, update: ProfileUpdate) {
    fn set(target: &mut Option<String>, value: Option<String>) {
        if let Some(value) = value {
            let value = value.trim().to_string();
            *target = (!value.is_empty()).then_some(value);
        }
    }

    set(&mut user.name, update.name);
    set(&mut user.email, update.email);
    set(&mut user.bio, update.bio);
    set(&mut user.location, update.location);
    set(&mut user.university, update.university);
    set(&mut user.major, update.major);
    set(&mut user.website, update.website);
    set(&mut user.avatar_url, update.avatar_url);
    if update.graduation_year.is_some() {
        user.graduation_year = update.graduation_year;
    }
}
