//! Shopkeep CLI - Database migrations and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! shopkeep-cli migrate
//!
//! # Insert a demo user, store and products
//! shopkeep-cli seed
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `seed` - Seed the database with demo data

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "shopkeep-cli")]
#[command(author, version, about = "Shopkeep CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Insert a demo user with one store and a few products
    Seed {
        /// Email of the demo user
        #[arg(short, long, default_value = "demo@shopkeep.dev")]
        email: String,

        /// Display name of the demo user
        #[arg(short, long, default_value = "Demo Owner")]
        name: String,
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
        Commands::Seed { email, name } => commands::seed::demo(&email, &name).await?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_seed_defaults() {
        let cli = Cli::try_parse_from(["shopkeep-cli", "seed"]).unwrap_or_else(|e| panic!("{e}"));
        let Commands::Seed { email, name } = cli.command else {
            panic!("expected seed command");
        };
        assert_eq!(email, "demo@shopkeep.dev");
        assert_eq!(name, "Demo Owner");
    }
}
