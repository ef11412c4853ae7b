//! UserRecord domain model.
//!
//! A user record is created at registration and mutated by profile edits.
//! Whether the profile is complete is never stored; see
//! [`super::completion`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};
use uuid::Uuid;

/// Names of the identity and profile fields on a [`UserRecord`].
///
/// The string form matches the field names the dashboard uses
/// (`graduationYear`, `avatar`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, IntoStaticStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ProfileField {
    Name,
    Email,
    Bio,
    Location,
    University,
    Major,
    GraduationYear,
    Website,
    Avatar,
}

/// The fields that must be non-empty for a profile to count as complete,
/// in display order.
pub const REQUIRED_FIELDS: [ProfileField; 7] = [
    ProfileField::Name,
    ProfileField::Email,
    ProfileField::Bio,
    ProfileField::University,
    ProfileField::Major,
    ProfileField::Location,
    ProfileField::GraduationYear,
];

/// A Dreamclerk user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Unique identifier (UUID string).
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub university: Option<String>,
    pub major: Option<String>,
    pub graduation_year: Option<u16>,
    pub website: Option<String>,
    /// Reference to the avatar image (URL or storage key).
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserRecord {
    /// Creates a fresh record with a generated id and only identity fields set.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name: Some(name.into()),
            email: Some(email.into()),
            bio: None,
            location: None,
            university: None,
            major: None,
            graduation_year: None,
            website: None,
            avatar_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns the textual value of a field, if any.
    ///
    /// `graduation_year` is rendered as its decimal string.
    pub fn field_value(&self, field: ProfileField) -> Option<String> {
        match field {
            ProfileField::Name => self.name.clone(),
            ProfileField::Email => self.email.clone(),
            ProfileField::Bio => self.bio.clone(),
            ProfileField::Location => self.location.clone(),
            ProfileField::University => self.university.clone(),
            ProfileField::Major => self.major.clone(),
            ProfileField::GraduationYear => self.graduation_year.map(|y| y.to_string()),
            ProfileField::Website => self.website.clone(),
            ProfileField::Avatar => self.avatar_url.clone(),
        }
    }

    /// True when the field has a value and that value is not the empty string.
    pub fn is_filled(&self, field: ProfileField) -> bool {
        let text = match field {
            ProfileField::Name => &self.name,
            ProfileField::Email => &self.email,
            ProfileField::Bio => &self.bio,
            ProfileField::Location => &self.location,
            ProfileField::University => &self.university,
            ProfileField::Major => &self.major,
            ProfileField::GraduationYear => return self.graduation_year.is_some(),
            ProfileField::Website => &self.website,
            ProfileField::Avatar => &self.avatar_url,
        };
        text.as_deref().is_some_and(|v| !v.is_empty())
    }

    /// Display name, falling back to the email address.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .or(self.email.as_deref())
            .unwrap_or("")
    }
}

/// A partial update to a user's profile. `None` leaves a field unchanged,
/// `Some("")` clears it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub university: Option<String>,
    pub major: Option<String>,
    pub graduation_year: Option<u16>,
    pub website: Option<String>,
    pub avatar_url: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_field_names_are_camel_case() {
        assert_eq!(ProfileField::GraduationYear.to_string(), "graduationYear");
        assert_eq!(ProfileField::from_str("bio").unwrap(), ProfileField::Bio);
        assert_eq!(
            serde_json::to_string(&ProfileField::GraduationYear).unwrap(),
            "\"graduationYear\""
        );
    }

    #[test]
    fn test_empty_string_is_not_filled() {
        let mut user = UserRecord::new("Ada", "ada@example.com");
        user.bio = Some(String::new());
        assert!(user.is_filled(ProfileField::Name));
        assert!(!user.is_filled(ProfileField::Bio));
        assert!(!user.is_filled(ProfileField::Major));
    }

    #[test]
    fn test_graduation_year_value() {
        let mut user = UserRecord::new("Ada", "ada@example.com");
        assert_eq!(user.field_value(ProfileField::GraduationYear), None);
        user.graduation_year = Some(2027);
        assert_eq!(
            user.field_value(ProfileField::GraduationYear).as_deref(),
            Some("2027")
        );
        assert!(user.is_filled(ProfileField::GraduationYear));
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let mut user = UserRecord::new("", "ada@example.com");
        assert_eq!(user.display_name(), "ada@example.com");
        user.name = Some("Ada".to_string());
        assert_eq!(user.display_name(), "Ada");
    }
}
