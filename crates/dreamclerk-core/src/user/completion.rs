//! Profile completion check.
//!
//! Completion is derived from the record on every read. Nothing stores it.

use serde::{Deserialize, Serialize};

use super::model::{ProfileField, REQUIRED_FIELDS, UserRecord};

/// Result of comparing a user record against a list of required fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileCompletion {
    pub is_complete: bool,
    /// Missing fields, in the order the required list declares them.
    pub missing_fields: Vec<ProfileField>,
    /// Number of required fields that were checked.
    pub required_count: usize,
}

impl ProfileCompletion {
    /// Share of required fields that are filled, as a whole percentage.
    pub fn completion_percent(&self) -> u8 {
        if self.required_count == 0 {
            return 100;
        }
        let filled = self.required_count - self.missing_fields.len();
        ((filled * 100) / self.required_count) as u8
    }
}

/// Checks `user` against [`REQUIRED_FIELDS`].
pub fn check_profile(user: &UserRecord) -> ProfileCompletion {
    check_fields(user, &REQUIRED_FIELDS)
}

/// Checks `user` against a caller-supplied field list.
pub fn check_fields(user: &UserRecord, fields: &[ProfileField]) -> ProfileCompletion {
    let missing_fields: Vec<ProfileField> = fields
        .iter()
        .copied()
        .filter(|field| !user.is_filled(*field))
        .collect();

    ProfileCompletion {
        is_complete: missing_fields.is_empty(),
        missing_fields,
        required_count: fields.len(),
    }
}
