use colored::Colorize;
use serde_json::Value;

use dreamclerk_core::DreamclerkError;
use dreamclerk_core::registration::{PasswordScore, PasswordStrength};

/// Renders an error the way the sign-up modal would: the rule message for
/// validation failures, a generic retry line otherwise.
pub fn error_line(err: &DreamclerkError) -> String {
    format!("✗ {}", err.user_message()).red().to_string()
}

pub fn success_line(message: &str) -> String {
    format!("✓ {}", message).green().to_string()
}

pub fn strength_label(score: &PasswordScore) -> String {
    let label = format!("{} ({}/5)", score.strength, score.score);
    match score.strength {
        PasswordStrength::Weak => label.red().to_string(),
        PasswordStrength::Medium => label.yellow().to_string(),
        PasswordStrength::Strong => label.green().to_string(),
    }
}

/// Pretty JSON for structured output.
pub fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(e) => tracing::warn!(error = %e, "failed to render JSON"),
    }
}
