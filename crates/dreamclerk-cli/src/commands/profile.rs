use clap::Subcommand;
use serde_json::json;

use dreamclerk_application::SessionContext;
use dreamclerk_core::error::Result;
use dreamclerk_core::user::ProfileUpdate;

use super::utils::{print_json, success_line};

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Print a user record as JSON
    Show { user_id: String },
    /// Report which required fields are missing
    Check { user_id: String },
    /// Update profile fields; pass an empty string to clear one
    Update {
        user_id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        bio: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        university: Option<String>,
        #[arg(long)]
        major: Option<String>,
        #[arg(long)]
        graduation_year: Option<u16>,
        #[arg(long)]
        website: Option<String>,
        #[arg(long)]
        avatar_url: Option<String>,
    },
}

pub async fn run(session: &SessionContext, action: ProfileAction) -> Result<()> {
    let profiles = session.profiles();
    match action {
        ProfileAction::Show { user_id } => {
            let user = profiles.get(&user_id).await?;
            print_json(&serde_json::to_value(&user)?);
        }
        ProfileAction::Check { user_id } => {
            let completion = profiles.completion(&user_id).await?;
            print_json(&json!({
                "isComplete": completion.is_complete,
                "missingFields": completion.missing_fields,
                "percent": completion.completion_percent(),
            }));
        }
        ProfileAction::Update {
            user_id,
            name,
            email,
            bio,
            location,
            university,
            major,
            graduation_year,
            website,
            avatar_url,
        } => {
            let update = ProfileUpdate {
                name,
                email,
                bio,
                location,
                university,
                major,
                graduation_year,
                website,
                avatar_url,
            };
            let user = profiles.update(&user_id, update).await?;
            let completion = profiles.completion(&user.id).await?;
            println!(
                "{}",
                success_line(&format!(
                    "Profile saved ({}% complete)",
                    completion.completion_percent()
                ))
            );
        }
    }
    Ok(())
}
