//! CLI subcommands.

pub mod migrate;
pub mod seed;

use secrecy::SecretString;
use thiserror::Error;

use shopkeep_api::db::RepositoryError;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Database connection error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration failed.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Repository operation failed.
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Read `DATABASE_URL`, loading `.env` first.
fn database_url() -> Result<SecretString, CommandError> {
    dotenvy::dotenv().ok();

    std::env::var("DATABASE_URL")
        .map(SecretString::from)
        .map_err(|_| CommandError::MissingEnvVar("DATABASE_URL"))
}
