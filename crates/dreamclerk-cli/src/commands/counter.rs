use clap::Subcommand;

use dreamclerk_application::SessionContext;
use dreamclerk_core::error::Result;

#[derive(Subcommand)]
pub enum CounterAction {
    /// Show the registrations count and the stored stats record
    Show,
    /// Re-read the registrations count and publish count + 1
    Increment,
}

pub async fn run(session: &SessionContext, action: CounterAction) -> Result<()> {
    let counter = session.counter();
    match action {
        CounterAction::Show => {
            println!("Registrations: {}", counter.get_count().await);
            match counter.stats().await? {
                Some(record) => println!(
                    "{}: {} (updated {})",
                    record.name,
                    record.value,
                    record.updated_at.to_rfc3339()
                ),
                None => println!("{}: not published yet", counter.counter_name()),
            }
        }
        CounterAction::Increment => {
            println!("{}: {}", counter.counter_name(), counter.increment().await);
        }
    }
    Ok(())
}
