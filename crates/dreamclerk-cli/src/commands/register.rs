use clap::Args;

use dreamclerk_application::SessionContext;
use dreamclerk_core::error::Result;
use dreamclerk_core::registration::{RegistrationForm, RegistrationWizard, StepOutcome, score_password};

use super::utils::{strength_label, success_line};

#[derive(Args)]
pub struct RegisterArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    #[arg(long)]
    pub confirm_password: String,
    #[arg(long, default_value = "")]
    pub bio: String,
    #[arg(long)]
    pub accept_terms: bool,
}

impl From<RegisterArgs> for RegistrationForm {
    fn from(args: RegisterArgs) -> Self {
        RegistrationForm {
            name: args.name,
            email: args.email,
            password: args.password,
            confirm_password: args.confirm_password,
            bio: args.bio,
            accept_terms: args.accept_terms,
        }
    }
}

/// Drives the wizard step by step, stopping at the first failing step.
pub async fn run(session: &SessionContext, args: RegisterArgs) -> Result<()> {
    let mut wizard = RegistrationWizard::with_form(args.into());

    loop {
        let step = wizard.step();
        match wizard.next()? {
            StepOutcome::Advance(next) => {
                tracing::debug!(step, next, "registration step passed");
                if step == 3 {
                    println!("Password strength: {}", strength_label(&wizard.password_strength()));
                }
            }
            StepOutcome::Submit => break,
        }
    }

    let user = session.register(&mut wizard).await?;
    println!("{}", success_line(&format!("Registered {} ({})", user.display_name(), user.id)));
    println!("Active users: {}", session.counter().last_known());
    Ok(())
}

pub fn print_strength(password: &str) {
    println!("{}", strength_label(&score_password(password)));
}
