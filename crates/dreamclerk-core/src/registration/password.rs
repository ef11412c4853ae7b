//! Password strength scoring.
//!
//! The score is informational and never blocks submission.

use serde::{Deserialize, Serialize};
use strum::Display;

/// Strength bucket shown next to the password field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Display)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    /// Maps a 0-5 score to its bucket.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => Self::Weak,
            3 => Self::Medium,
            _ => Self::Strong,
        }
    }
}

/// Score and bucket for a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordScore {
    pub score: u8,
    pub strength: PasswordStrength,
}

/// Scores a password: one point each for length >= 8, an uppercase letter,
/// a lowercase letter, a digit and a symbol (any character that is neither
/// a letter nor a digit, whitespace included).
pub fn score_password(password: &str) -> PasswordScore {
    let criteria = [
        password.chars().count() >= 8,
        password.chars().any(char::is_uppercase),
        password.chars().any(char::is_lowercase),
        password.chars().any(char::is_numeric),
        password.chars().any(|c| !c.is_alphanumeric()),
    ];
    let score = criteria.iter().filter(|met| **met).count() as u8;

    PasswordScore {
        score,
        strength: PasswordStrength::from_score(score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_password_is_weak() {
        let result = score_password("");
        assert_eq!(result.score, 0);
        assert_eq!(result.strength, PasswordStrength::Weak);
    }

    #[test]
    fn test_lowercase_digits_eight_chars() {
        // length, lowercase, digit
        let result = score_password("abc12345");
        assert_eq!(result.score, 3);
        assert_eq!(result.strength, PasswordStrength::Medium);
    }

    #[test]
    fn test_short_lowercase_digits_is_weak() {
        let result = score_password("abc123");
        assert_eq!(result.score, 2);
        assert_eq!(result.strength, PasswordStrength::Weak);
    }

    #[test]
    fn test_all_criteria() {
        let result = score_password("Abc123!@#");
        assert_eq!(result.score, 5);
        assert_eq!(result.strength, PasswordStrength::Strong);
    }

    #[test]
    fn test_score_is_monotonic_as_criteria_are_added() {
        let steps = ["a", "ab", "abcdefgh", "abcdefgH", "abcdefH1", "abcdeH1!"];
        let mut previous = 0;
        for password in steps {
            let score = score_password(password).score;
            assert!(score >= previous, "{} scored {} < {}", password, score, previous);
            previous = score;
        }
        assert_eq!(previous, 5);
    }

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(PasswordStrength::from_score(2), PasswordStrength::Weak);
        assert_eq!(PasswordStrength::from_score(3), PasswordStrength::Medium);
        assert_eq!(PasswordStrength::from_score(4), PasswordStrength::Strong);
        assert_eq!(PasswordStrength::from_score(5), PasswordStrength::Strong);
    }

    #[test]
    fn test_whitespace_counts_as_symbol() {
        // length, lowercase, symbol
        let result = score_password("abcd efgh");
        assert_eq!(result.score, 3);
    }

    #[test]
    fn test_non_ascii_letters_and_digits() {
        // uppercase, lowercase, digit (Arabic-Indic three)
        let result = score_password("Éé\u{0663}");
        assert_eq!(result.score, 3);
        assert_eq!(result.strength, PasswordStrength::Medium);
    }
}
