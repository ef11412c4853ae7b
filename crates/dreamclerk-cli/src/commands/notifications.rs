use clap::Subcommand;
use colored::Colorize;

use dreamclerk_application::SessionContext;
use dreamclerk_core::error::Result;

use super::utils::success_line;

#[derive(Subcommand)]
pub enum NotificationAction {
    /// List a user's notifications, newest first
    List { user_id: String },
    /// Mark one notification read
    Read { id: String },
    /// Mark all of a user's notifications read
    ReadAll { user_id: String },
}

pub async fn run(session: &SessionContext, action: NotificationAction) -> Result<()> {
    let center = session.notifications();
    match action {
        NotificationAction::List { user_id } => {
            let notifications = center.list(&user_id).await?;
            if notifications.is_empty() {
                println!("No notifications.");
            }
            for n in notifications {
                let marker = if n.read { " ".normal() } else { "●".blue() };
                let link = n.link.map(|l| format!(" -> {}", l)).unwrap_or_default();
                println!(
                    "{} [{}] {} {}{}  ({})",
                    marker,
                    n.kind,
                    n.created_at.format("%Y-%m-%d %H:%M"),
                    n.message,
                    link,
                    n.id
                );
            }
        }
        NotificationAction::Read { id } => {
            center.mark_read(&id).await?;
            println!("{}", success_line("Marked as read"));
        }
        NotificationAction::ReadAll { user_id } => {
            let count = center.mark_all_read(&user_id).await?;
            println!("{}", success_line(&format!("Marked {} notification(s) as read", count)));
        }
    }
    Ok(())
}
