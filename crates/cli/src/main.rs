//! Clubhouse CLI - Database migrations and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Run board database migrations
//! clubhouse-cli migrate
//!
//! # Grant the admin flag to a user
//! clubhouse-cli admin grant -u alice
//!
//! # Revoke the admin flag from a user
//! clubhouse-cli admin revoke -u alice
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `admin grant`/`admin revoke` - Manage the admin flag
//!
//! Admins are only ever created here; there is no signup path to admin.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "clubhouse-cli")]
#[command(author, version, about = "Clubhouse CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run board database migrations
    Migrate,
    /// Manage admin users
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Grant the admin flag to a user
    Grant {
        /// Username of the account
        #[arg(short, long)]
        username: String,
    },
    /// Revoke the admin flag from a user
    Revoke {
        /// Username of the account
        #[arg(short, long)]
        username: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Admin { action } => match action {
            AdminAction::Grant { username } => commands::admin::set_admin(&username, true).await?,
            AdminAction::Revoke { username } => commands::admin::set_admin(&username, false).await?,
        },
    }

    Ok(())
}
