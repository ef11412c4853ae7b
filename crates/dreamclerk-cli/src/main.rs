use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use dreamclerk_application::SessionContext;
use dreamclerk_core::DreamclerkError;
use dreamclerk_infrastructure::ConfigService;

mod commands;

#[derive(Parser)]
#[command(name = "dreamclerk")]
#[command(about = "Dreamclerk CLI - registration, profiles and dashboard data", long_about = None)]
struct Cli {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Document store directory (overrides config)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new user through the sign-up wizard rules
    Register(commands::register::RegisterArgs),
    /// Inspect or edit a user profile
    Profile {
        #[command(subcommand)]
        action: commands::profile::ProfileAction,
    },
    /// Read or bump the active users counter
    Counter {
        #[command(subcommand)]
        action: commands::counter::CounterAction,
    },
    /// List notifications and mark them read
    Notifications {
        #[command(subcommand)]
        action: commands::notifications::NotificationAction,
    },
    /// Score a password without registering
    PasswordStrength {
        password: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_service = match &cli.config {
        Some(path) => ConfigService::new(path),
        None => ConfigService::with_default_path()?,
    };
    let mut config = config_service.get_config().await?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = Some(data_dir);
    }

    init_tracing(&config.log_level);
    tracing::debug!(config = %config_service.path().display(), "configuration loaded");

    let session = SessionContext::open(config)?;

    let result = match cli.command {
        Commands::Register(args) => commands::register::run(&session, args).await,
        Commands::Profile { action } => commands::profile::run(&session, action).await,
        Commands::Counter { action } => commands::counter::run(&session, action).await,
        Commands::Notifications { action } => commands::notifications::run(&session, action).await,
        Commands::PasswordStrength { password } => {
            commands::register::print_strength(&password);
            Ok(())
        }
    };

    if let Err(err) = &result {
        tracing::error!(error = %err, "command failed");
        eprintln!("{}", commands::utils::error_line(err));
        std::process::exit(exit_code(err));
    }

    session.logout().await;
    Ok(())
}

/// Logs go to stderr; `RUST_LOG` wins over the configured level.
fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn exit_code(err: &DreamclerkError) -> i32 {
    match err {
        DreamclerkError::Validation(_) => 2,
        DreamclerkError::NotFound { .. } => 3,
        DreamclerkError::Conflict(_) => 4,
        _ => 1,
    }
}
